//! Domain layer for cadastro
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Address form
//!
//! - **PostalIdentifier**: a validated eight-digit CEP
//! - **AddressForm**: the form fields plus the lookup state machine
//!   (`Idle → Validating → Loading → Success | Error`)
//!
//! ## Sign classification
//!
//! - **SignRecord**: a named day/month range, possibly crossing the year end
//! - **SignCatalog**: the read-only, ordered set of records a date is matched against

pub mod config;
pub mod core;
pub mod form;
pub mod postal;
pub mod zodiac;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use form::{AddressForm, Alert, AlertLevel, FieldMarker, LookupState};
pub use postal::{AddressRecord, LookupOutcome, PostalIdentifier, ValidationError, mask_partial};
pub use zodiac::{
    CalendarDate, DateInputError, DayMonth, SignCatalog, SignRecord, match_sign,
};
