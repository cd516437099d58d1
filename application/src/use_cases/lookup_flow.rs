//! Address lookup flow use case
//!
//! Drives the address form through validate → format → fetch → populate and
//! owns the form's lookup state machine.

use crate::ports::address_lookup::AddressLookup;
use crate::ports::lookup_progress::{LookupProgressNotifier, NoLookupProgress};
use cadastro_domain::form::alert::{
    MSG_CLEARED, MSG_NOT_FOUND, MSG_SUBMIT_INVALID_CEP, MSG_SUBMIT_NO_LOOKUP, MSG_SUBMITTED,
    MSG_TRANSPORT,
};
use cadastro_domain::{AddressForm, Alert, LookupOutcome, LookupState, PostalIdentifier};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// A search action that was not started
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchRejected {
    #[error("A CEP lookup is already in progress")]
    InProgress,
}

/// A submit action that was refused
///
/// The display strings are the warnings shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{}", MSG_SUBMIT_INVALID_CEP)]
    InvalidIdentifier,

    #[error("{}", MSG_SUBMIT_NO_LOOKUP)]
    LookupRequired,
}

struct FlowState {
    form: AddressForm,
    /// A request is out, whatever the form shows
    in_flight: bool,
    /// Bumped by `clear`; results from an older generation are dropped
    generation: u64,
}

/// Use case owning one address form and its lookup requests
///
/// All actions take `&self`, so a single controller can be shared between
/// an input loop and a running search. At most one request is in flight:
/// searches are rejected until it settles, and it always runs to completion.
///
/// Notifier callbacks run while the form is locked and must not call back
/// into the controller.
pub struct LookupFlowController<L: AddressLookup + 'static> {
    lookup: Arc<L>,
    state: Mutex<FlowState>,
}

impl<L: AddressLookup + 'static> LookupFlowController<L> {
    pub fn new(lookup: Arc<L>) -> Self {
        Self {
            lookup,
            state: Mutex::new(FlowState {
                form: AddressForm::new(),
                in_flight: false,
                generation: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FlowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current form
    pub fn snapshot(&self) -> AddressForm {
        self.lock().form.clone()
    }

    pub fn state(&self) -> LookupState {
        self.lock().form.state
    }

    /// A request is still running
    pub fn is_loading(&self) -> bool {
        self.lock().in_flight
    }

    /// Input-change event on the CEP field; returns the masked text
    ///
    /// Editing the field while a request is out makes its result stale: it is
    /// dropped and the form goes back to `Idle`.
    pub fn input_cep(&self, raw: &str) -> String {
        self.lock().form.set_cep_input(raw).to_string()
    }

    pub fn set_number(&self, number: impl Into<String>) {
        self.lock().form.number = number.into();
    }

    pub fn set_complement(&self, complement: impl Into<String>) {
        self.lock().form.complement = complement.into();
    }

    /// Search the CEP currently in the form
    pub async fn search(&self) -> Result<LookupState, SearchRejected> {
        self.search_with_progress(&NoLookupProgress).await
    }

    /// Search with progress callbacks
    ///
    /// Returns the state the form settled in (`Success` or `Error`).
    pub async fn search_with_progress(
        &self,
        progress: &dyn LookupProgressNotifier,
    ) -> Result<LookupState, SearchRejected> {
        let Some((identifier, generation)) = self.begin_search(progress)? else {
            return Ok(LookupState::Error);
        };

        progress.on_lookup_start(&identifier);
        let outcome = self.lookup.fetch_address(&identifier).await;
        let state = self.finish_search(generation, &identifier, outcome, progress);
        progress.on_lookup_finish(state);

        Ok(state)
    }

    /// Validate and move to `Loading`
    ///
    /// `Ok(None)` means validation failed and the form is already in `Error`.
    fn begin_search(
        &self,
        progress: &dyn LookupProgressNotifier,
    ) -> Result<Option<(PostalIdentifier, u64)>, SearchRejected> {
        let mut guard = self.lock();
        let flow = &mut *guard;

        if flow.in_flight || !flow.form.state.accepts_search() {
            debug!("Search rejected: lookup already in flight");
            return Err(SearchRejected::InProgress);
        }

        let form = &mut flow.form;
        form.alert = None;
        form.unmark_cep();
        transition(form, LookupState::Validating, progress);

        match PostalIdentifier::validate(&form.cep) {
            Err(e) => {
                info!("CEP '{}' rejected: {:?}", form.cep, e);
                form.mark_cep_invalid(e.to_string());
                form.alert = Some(Alert::danger(e.to_string()));
                transition(form, LookupState::Error, progress);
                Ok(None)
            }
            Ok(identifier) => {
                form.cep = identifier.formatted();
                transition(form, LookupState::Loading, progress);
                flow.in_flight = true;
                Ok(Some((identifier, flow.generation)))
            }
        }
    }

    fn finish_search(
        &self,
        generation: u64,
        identifier: &PostalIdentifier,
        outcome: LookupOutcome,
        progress: &dyn LookupProgressNotifier,
    ) -> LookupState {
        let mut guard = self.lock();
        let flow = &mut *guard;
        flow.in_flight = false;

        if flow.generation != generation {
            info!(
                "Dropping {} result for CEP {}: form was cleared",
                outcome.as_str(),
                identifier
            );
            return flow.form.state;
        }

        let form = &mut flow.form;
        if form.cep != identifier.formatted() {
            info!(
                "Dropping {} result for CEP {}: field now reads '{}'",
                outcome.as_str(),
                identifier,
                form.cep
            );
            transition(form, LookupState::Idle, progress);
            return form.state;
        }

        match outcome {
            LookupOutcome::Found(record) => {
                info!("CEP {} resolved to {}", identifier, record.summary());
                form.populate(&record);
                form.mark_cep_valid();
                form.alert = Some(Alert::success(format!(
                    "Endereço encontrado: {}",
                    record.summary()
                )));
                transition(form, LookupState::Success, progress);
            }
            LookupOutcome::NotFound => {
                info!("CEP {} not found", identifier);
                fail_lookup(form, MSG_NOT_FOUND, progress);
            }
            LookupOutcome::TransportError(detail) => {
                warn!("Lookup for CEP {} failed: {}", identifier, detail);
                fail_lookup(form, MSG_TRANSPORT, progress);
            }
        }

        form.state
    }

    /// Reset every field and message; the form goes back to `Idle`
    ///
    /// Returns the acknowledgment to show. A request still in flight keeps
    /// running, its result is discarded, and searches stay blocked until it
    /// settles.
    pub fn clear(&self) -> Alert {
        let mut guard = self.lock();
        guard.generation = guard.generation.wrapping_add(1);
        guard.form.reset();
        debug!("Address form cleared");
        Alert::info(MSG_CLEARED)
    }

    /// Finalize the form
    ///
    /// Accepted only with a valid CEP and a completed lookup (street and city
    /// filled). Nothing is sent anywhere; a rejected submit leaves the state
    /// machine where it was.
    pub fn submit(&self) -> Result<Alert, SubmitError> {
        let mut guard = self.lock();
        let form = &mut guard.form;

        let result = match PostalIdentifier::validate(&form.cep) {
            Err(_) => Err(SubmitError::InvalidIdentifier),
            Ok(_) if form.state == LookupState::Loading || !form.has_required_address() => {
                Err(SubmitError::LookupRequired)
            }
            Ok(identifier) => {
                info!("Address for CEP {} submitted", identifier);
                Ok(Alert::success(MSG_SUBMITTED))
            }
        };

        form.alert = Some(match &result {
            Ok(alert) => alert.clone(),
            Err(e) => Alert::warning(e.to_string()),
        });

        result
    }
}

fn transition(form: &mut AddressForm, to: LookupState, progress: &dyn LookupProgressNotifier) {
    let from = form.state;
    if from != to {
        debug!("Lookup state {} -> {}", from, to);
        form.state = to;
        progress.on_state_change(from, to);
    }
}

fn fail_lookup(form: &mut AddressForm, message: &str, progress: &dyn LookupProgressNotifier) {
    form.mark_cep_invalid(message);
    form.alert = Some(Alert::danger(message));
    form.clear_lookup_fields();
    transition(form, LookupState::Error, progress);
}
