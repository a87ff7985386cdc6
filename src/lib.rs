//! # term-match
//!
//! Engine for a timed card-matching game: flip a card to reveal a term,
//! then pick its definition from shuffled candidates before the countdown
//! runs out.
//!
//! ## Scoring
//!
//! - Correct pick: remaining seconds × 10
//! - Wrong pick: −50
//! - Timeout: no change
//!
//! ## Design Principles
//!
//! 1. **One owner**: All mutable game state lives in a single `RoundState`
//!    owned by `RoundEngine`. Callers get read-only views.
//!
//! 2. **No clock inside**: The engine is synchronous. Time enters through
//!    `tick()`, driven by a `session::Ticker` over an injected `Clock`.
//!
//! 3. **Deterministic**: Seeded ChaCha8 RNG, so a seed replays the same
//!    deals.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `catalog`: Term entries and the validated catalog
//! - `round`: Round state machine, dealing, outcomes
//! - `session`: UI intent mapping, clocks, transient feedback

pub mod catalog;
pub mod core;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use crate::core::{DistractorPolicy, EngineError, Result, RoundConfig, RoundRng, RoundRngState};

pub use crate::catalog::{TermCatalog, TermEntry};

pub use crate::round::{
    Candidates, Phase, RoundEngine, RoundOutcome, RoundRecord, RoundSnapshot, RoundState,
    TickOutcome,
};

pub use crate::session::{Clock, GameSession, ManualClock, SessionView, SystemClock, Ticker};
