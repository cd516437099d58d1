//! ViaCEP JSON response body

use cadastro_domain::AddressRecord;
use serde::Deserialize;
use serde_json::Value;

/// Fields cadastro reads from a ViaCEP answer; everything else is ignored
#[derive(Debug, Default, Deserialize)]
pub struct ViaCepPayload {
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub localidade: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    /// `true` (or `"true"`) when the CEP does not exist
    #[serde(default)]
    pub erro: Option<Value>,
}

impl ViaCepPayload {
    pub fn is_not_found(&self) -> bool {
        match &self.erro {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    pub fn into_record(self) -> AddressRecord {
        AddressRecord {
            street: non_blank(self.logradouro),
            neighborhood: non_blank(self.bairro),
            city: non_blank(self.localidade),
            state_code: non_blank(self.uf),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
