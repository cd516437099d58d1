//! Address record and lookup outcome

use serde::{Deserialize, Serialize};

/// Address resolved for a CEP
///
/// Every field is optional; missing ones render as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state_code: Option<String>,
}

impl AddressRecord {
    pub fn street(&self) -> &str {
        self.street.as_deref().unwrap_or("")
    }

    pub fn neighborhood(&self) -> &str {
        self.neighborhood.as_deref().unwrap_or("")
    }

    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }

    pub fn state_code(&self) -> &str {
        self.state_code.as_deref().unwrap_or("")
    }

    /// One-line summary: `street, neighborhood - city/UF`
    pub fn summary(&self) -> String {
        format!(
            "{}, {} - {}/{}",
            self.street(),
            self.neighborhood(),
            self.city(),
            self.state_code()
        )
    }
}

/// Result of one remote lookup attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(AddressRecord),
    /// The service answered, but has no address for the CEP
    NotFound,
    /// The request failed or returned a non-success status
    TransportError(String),
}

impl LookupOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            LookupOutcome::Found(_) => "found",
            LookupOutcome::NotFound => "not_found",
            LookupOutcome::TransportError(_) => "transport_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let record = AddressRecord {
            street: Some("Avenida Paulista".to_string()),
            neighborhood: Some("Bela Vista".to_string()),
            city: Some("São Paulo".to_string()),
            state_code: Some("SP".to_string()),
        };
        assert_eq!(
            record.summary(),
            "Avenida Paulista, Bela Vista - São Paulo/SP"
        );
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let record = AddressRecord {
            city: Some("Brasília".to_string()),
            ..Default::default()
        };
        assert_eq!(record.street(), "");
        assert_eq!(record.neighborhood(), "");
        assert_eq!(record.summary(), ",  - Brasília/");
    }

    #[test]
    fn test_outcome_tags() {
        assert_eq!(LookupOutcome::Found(AddressRecord::default()).as_str(), "found");
        assert_eq!(LookupOutcome::NotFound.as_str(), "not_found");
        assert_eq!(
            LookupOutcome::TransportError("boom".into()).as_str(),
            "transport_error"
        );
    }
}
