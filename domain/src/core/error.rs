//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid day/month: {0} (expected DD/MM)")]
    InvalidDayMonth(String),

    #[error("Invalid sign record '{name}': {reason}")]
    InvalidSignRecord { name: String, reason: String },
}
