//! ViaCEP web service adapter

mod client;
mod payload;

pub use client::{ViaCepClient, ViaCepError};
pub use payload::ViaCepPayload;
