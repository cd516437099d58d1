//! User-visible form messages

use serde::{Deserialize, Serialize};

pub const MSG_CLEARED: &str = "Formulário limpo com sucesso!";
pub const MSG_WELCOME: &str =
    "Digite o CEP no campo acima e clique em \"Buscar\" para preencher automaticamente o endereço.";
pub const MSG_NOT_FOUND: &str = "Erro ao buscar CEP: CEP não encontrado";
pub const MSG_TRANSPORT: &str = "Erro ao buscar CEP: Erro na requisição";
pub const MSG_SUBMIT_INVALID_CEP: &str = "Por favor, preencha um CEP válido antes de salvar.";
pub const MSG_SUBMIT_NO_LOOKUP: &str = "Por favor, busque um CEP válido antes de salvar.";
pub const MSG_SUBMITTED: &str = "Endereço salvo com sucesso!";

/// Severity of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Success,
    Danger,
    Warning,
    Info,
}

impl AlertLevel {
    pub fn as_str(&self) -> &str {
        match self {
            AlertLevel::Success => "success",
            AlertLevel::Danger => "danger",
            AlertLevel::Warning => "warning",
            AlertLevel::Info => "info",
        }
    }
}

/// A message shown above the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

impl Alert {
    pub fn new(level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Success, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Danger, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Info, message)
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
