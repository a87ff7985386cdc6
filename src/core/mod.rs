//! Core building blocks: RNG, configuration, errors.
//!
//! Everything here is independent of the term catalog and the round
//! state machine.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DistractorPolicy, RoundConfig};
pub use error::{EngineError, Result};
pub use rng::{RoundRng, RoundRngState};
