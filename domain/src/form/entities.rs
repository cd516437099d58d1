//! Address form entity

use super::alert::Alert;
use super::state::LookupState;
use crate::postal::{AddressRecord, mask_partial};
use serde::{Deserialize, Serialize};

/// Validity marker on the CEP field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldMarker {
    #[default]
    Unmarked,
    Valid,
    Invalid,
}

/// The address form: one editable CEP field, four fields filled by the
/// lookup and two free-text fields the user fills in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressForm {
    /// CEP text as typed, kept masked
    pub cep: String,
    pub cep_marker: FieldMarker,
    /// Inline message under the CEP field
    pub cep_error: Option<String>,

    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state_code: String,

    pub number: String,
    pub complement: String,

    pub alert: Option<Alert>,
    pub state: LookupState,
}

impl AddressForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the live mask to new CEP input
    ///
    /// Editing the field drops any validity marker and the current alert.
    pub fn set_cep_input(&mut self, raw: &str) -> &str {
        self.cep = mask_partial(raw);
        self.unmark_cep();
        self.alert = None;
        &self.cep
    }

    pub fn unmark_cep(&mut self) {
        self.cep_marker = FieldMarker::Unmarked;
        self.cep_error = None;
    }

    pub fn mark_cep_valid(&mut self) {
        self.cep_marker = FieldMarker::Valid;
        self.cep_error = None;
    }

    pub fn mark_cep_invalid(&mut self, message: impl Into<String>) {
        self.cep_marker = FieldMarker::Invalid;
        self.cep_error = Some(message.into());
    }

    /// Copy an address into the read-only fields
    pub fn populate(&mut self, record: &AddressRecord) {
        self.street = record.street().to_string();
        self.neighborhood = record.neighborhood().to_string();
        self.city = record.city().to_string();
        self.state_code = record.state_code().to_string();
    }

    /// Empty the fields filled by a lookup, leaving user input alone
    pub fn clear_lookup_fields(&mut self) {
        self.street.clear();
        self.neighborhood.clear();
        self.city.clear();
        self.state_code.clear();
    }

    /// Street and city were filled by a successful lookup
    pub fn has_required_address(&self) -> bool {
        !self.street.is_empty() && !self.city.is_empty()
    }

    /// Back to an empty, idle form
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
