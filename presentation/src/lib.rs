//! Presentation layer for cadastro
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive address form.

pub mod cli;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputArg};
pub use form::{FormCommand, FormRepl, Step};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
