//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod address_lookup;
pub mod lookup_progress;
pub mod sign_catalog;
