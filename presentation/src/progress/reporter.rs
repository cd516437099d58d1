//! Progress reporting while a CEP lookup is in flight

use cadastro_application::LookupProgressNotifier;
use cadastro_domain::{LookupState, PostalIdentifier};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Shows a spinner for the duration of the request
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish_message(state: LookupState) -> String {
        match state {
            LookupState::Success => format!("{}", "endereço encontrado".green()),
            LookupState::Error => format!("{}", "falhou".red()),
            other => other.as_str().to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupProgressNotifier for ProgressReporter {
    fn on_lookup_start(&self, identifier: &PostalIdentifier) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Buscando CEP");
        pb.set_message(identifier.formatted());
        pb.enable_steady_tick(Duration::from_millis(80));

        *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_lookup_finish(&self, state: LookupState) {
        if let Some(pb) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pb.finish_with_message(Self::finish_message(state));
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl LookupProgressNotifier for SimpleProgress {
    fn on_lookup_start(&self, identifier: &PostalIdentifier) {
        println!("{} Buscando CEP {}...", "->".cyan(), identifier.formatted().bold());
    }

    fn on_lookup_finish(&self, state: LookupState) {
        println!("  {}", ProgressReporter::finish_message(state));
    }
}
