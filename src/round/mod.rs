//! Round engine: the flip → select → score → reset state machine.
//!
//! ## Phases
//!
//! - **Idle**: no card showing. `start_round` deals a new round.
//! - **Active**: a term and its shuffled candidates are showing and the
//!   countdown is running. `answer` scores the pick, `tick` counts down,
//!   and reaching zero expires the round.
//!
//! Every Active round ends in Idle; there is no direct Active → Active
//! transition. Calls made in the wrong phase are ignored.
//!
//! ## Example
//!
//! ```
//! use term_match::catalog::TermCatalog;
//! use term_match::core::RoundConfig;
//! use term_match::round::{Phase, RoundEngine, RoundOutcome};
//!
//! let config = RoundConfig::default().with_seed(42);
//! let mut engine = RoundEngine::new(TermCatalog::builtin(), config).unwrap();
//!
//! let round = engine.start_round().unwrap().expect("engine was idle");
//! assert_eq!(round.candidates.len(), 5);
//!
//! let correct = round.term.definition.clone();
//! let outcome = engine.answer(&correct);
//! assert_eq!(outcome, Some(RoundOutcome::Correct { delta: 200 }));
//! assert_eq!(engine.phase(), Phase::Idle);
//! assert_eq!(engine.score(), 200);
//! ```

mod deal;
pub mod engine;
pub mod outcome;
pub mod state;

pub use deal::Candidates;
pub use engine::RoundEngine;
pub use outcome::{RoundOutcome, RoundRecord, TickOutcome, TIMEOUT_NOTICE};
pub use state::{Phase, RoundSnapshot, RoundState};
