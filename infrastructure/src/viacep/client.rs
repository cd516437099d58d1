//! ViaCEP address lookup adapter

use super::payload::ViaCepPayload;
use crate::config::FileLookupConfig;
use async_trait::async_trait;
use cadastro_application::AddressLookup;
use cadastro_domain::{LookupOutcome, PostalIdentifier};
use thiserror::Error;
use tracing::{debug, info};

/// Errors while setting up the client
#[derive(Error, Debug)]
pub enum ViaCepError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Looks up addresses with `GET {endpoint}/{cep}/json/`
///
/// One request per call: no retries, no caching.
pub struct ViaCepClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ViaCepClient {
    pub fn new(config: &FileLookupConfig) -> Result<Self, ViaCepError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, identifier: &PostalIdentifier) -> String {
        format!("{}/{}/json/", self.endpoint, identifier.as_str())
    }
}

#[async_trait]
impl AddressLookup for ViaCepClient {
    async fn fetch_address(&self, identifier: &PostalIdentifier) -> LookupOutcome {
        let url = self.url_for(identifier);
        debug!("GET {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                return LookupOutcome::TransportError(format!("Failed to reach {}: {}", url, e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            return LookupOutcome::TransportError(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ));
        }

        let payload: ViaCepPayload = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                return LookupOutcome::TransportError(format!("Invalid response body: {}", e));
            }
        };

        if payload.is_not_found() {
            info!("ViaCEP has no address for {}", identifier);
            return LookupOutcome::NotFound;
        }

        LookupOutcome::Found(payload.into_record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadastro_domain::AddressRecord;
    use std::time::Duration;

    fn config(endpoint: String) -> FileLookupConfig {
        FileLookupConfig {
            endpoint,
            timeout_seconds: Some(5),
            ..Default::default()
        }
    }

    fn cep(raw: &str) -> PostalIdentifier {
        PostalIdentifier::validate(raw).unwrap()
    }

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let client = ViaCepClient::new(&config("https://viacep.com.br/ws/".to_string())).unwrap();
        assert_eq!(
            client.url_for(&cep("01310-000")),
            "https://viacep.com.br/ws/01310000/json/"
        );
    }

    #[tokio::test]
    async fn test_found() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ws/01310000/json/")
            .with_status(200)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(
                r#"{
                    "cep": "01310-000",
                    "logradouro": "Avenida Paulista",
                    "complemento": "até 610 - lado par",
                    "bairro": "Bela Vista",
                    "localidade": "São Paulo",
                    "uf": "SP",
                    "ibge": "3550308"
                }"#,
            )
            .create_async()
            .await;

        let client = ViaCepClient::new(&config(format!("{}/ws", server.url()))).unwrap();
        let outcome = client.fetch_address(&cep("01310000")).await;

        mock.assert_async().await;
        assert_eq!(
            outcome,
            LookupOutcome::Found(AddressRecord {
                street: Some("Avenida Paulista".to_string()),
                neighborhood: Some("Bela Vista".to_string()),
                city: Some("São Paulo".to_string()),
                state_code: Some("SP".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_found_with_blank_fields() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ws/69900970/json/")
            .with_status(200)
            .with_body(r#"{"logradouro": "", "bairro": "", "localidade": "Rio Branco", "uf": "AC"}"#)
            .create_async()
            .await;

        let client = ViaCepClient::new(&config(format!("{}/ws", server.url()))).unwrap();
        match client.fetch_address(&cep("69900970")).await {
            LookupOutcome::Found(record) => {
                assert!(record.street.is_none());
                assert_eq!(record.city(), "Rio Branco");
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_not_found_flag() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ws/99999998/json/")
            .with_status(200)
            .with_body(r#"{"erro": true}"#)
            .create_async()
            .await;

        let client = ViaCepClient::new(&config(format!("{}/ws", server.url()))).unwrap();
        assert_eq!(
            client.fetch_address(&cep("99999998")).await,
            LookupOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_not_found_flag_as_string() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ws/99999998/json/")
            .with_status(200)
            .with_body(r#"{"erro": "true"}"#)
            .create_async()
            .await;

        let client = ViaCepClient::new(&config(format!("{}/ws", server.url()))).unwrap();
        assert_eq!(
            client.fetch_address(&cep("99999998")).await,
            LookupOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ws/01310000/json/")
            .with_status(400)
            .expect(1)
            .create_async()
            .await;

        let client = ViaCepClient::new(&config(format!("{}/ws", server.url()))).unwrap();
        let outcome = client.fetch_address(&cep("01310000")).await;

        // Exactly one attempt, no retry
        mock.assert_async().await;
        match outcome {
            LookupOutcome::TransportError(detail) => assert!(detail.contains("400")),
            other => panic!("expected TransportError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ws/01310000/json/")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let client = ViaCepClient::new(&config(format!("{}/ws", server.url()))).unwrap();
        assert!(matches!(
            client.fetch_address(&cep("01310000")).await,
            LookupOutcome::TransportError(_)
        ));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let mut config = config("http://127.0.0.1:1/ws".to_string());
        config.timeout_seconds = Some(2);
        let client = ViaCepClient::new(&config).unwrap();

        assert!(matches!(
            client.fetch_address(&cep("01310000")).await,
            LookupOutcome::TransportError(_)
        ));
        assert_eq!(config.timeout(), Some(Duration::from_secs(2)));
    }
}
