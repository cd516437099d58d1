//! Lookup progress notification port
//!
//! Lets the presentation layer show a loading indicator while a CEP lookup
//! is in flight.

use cadastro_domain::{LookupState, PostalIdentifier};

/// Callback for lookup progress
pub trait LookupProgressNotifier: Send + Sync {
    /// Called when the request is sent
    fn on_lookup_start(&self, identifier: &PostalIdentifier);

    /// Called once the request settles, with the state it settled in
    fn on_lookup_finish(&self, state: LookupState);

    /// Called on every state machine transition
    fn on_state_change(&self, _from: LookupState, _to: LookupState) {}
}

/// No-op notifier for when progress reporting is not needed
pub struct NoLookupProgress;

impl LookupProgressNotifier for NoLookupProgress {
    fn on_lookup_start(&self, _identifier: &PostalIdentifier) {}
    fn on_lookup_finish(&self, _state: LookupState) {}
}
