//! Lookup request state machine

use serde::{Deserialize, Serialize};

/// State of the address form's lookup request
///
/// ```text
/// Idle ──search──> Validating ──ok──> Loading ──found──> Success
///                      │                  └──not found/error──> Error
///                      └──invalid──> Error
/// ```
///
/// `Success` and `Error` go back to `Validating` on the next search and to
/// `Idle` on clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupState {
    #[default]
    Idle,
    Validating,
    Loading,
    Success,
    Error,
}

impl LookupState {
    pub fn as_str(&self) -> &str {
        match self {
            LookupState::Idle => "idle",
            LookupState::Validating => "validating",
            LookupState::Loading => "loading",
            LookupState::Success => "success",
            LookupState::Error => "error",
        }
    }

    /// A search action may start from this state
    pub fn accepts_search(&self) -> bool {
        matches!(
            self,
            LookupState::Idle | LookupState::Success | LookupState::Error
        )
    }
}

impl std::fmt::Display for LookupState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
