//! Address form domain
//!
//! The form fields, the lookup state machine and the alerts shown to the user.

pub mod alert;
pub mod entities;
pub mod state;

pub use alert::{Alert, AlertLevel};
pub use entities::{AddressForm, FieldMarker};
pub use state::LookupState;
