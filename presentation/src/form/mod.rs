//! Interactive address form
//!
//! Provides a line-editor based interface over the lookup flow.

mod repl;

pub use repl::{FormCommand, FormRepl, Step};
