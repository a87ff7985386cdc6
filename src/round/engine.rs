//! The round engine.
//!
//! `RoundEngine` owns the catalog, configuration, RNG, and the single
//! `RoundState`. It has no clock: callers drive the countdown with
//! `tick()`, once per second while a round is active.
//!
//! ## Implementation Notes
//!
//! - `start_round` while Active returns `Ok(None)` and changes nothing
//! - `answer` and `tick` while Idle change nothing; a tick that arrives
//!   after the round was answered is therefore harmless
//! - `expire` only acts once the countdown is at zero

use im::Vector;
use tracing::{debug, info, warn};

use super::deal::deal;
use super::outcome::{RoundOutcome, RoundRecord, TickOutcome};
use super::state::{Phase, RoundSnapshot, RoundState};
use crate::catalog::TermCatalog;
use crate::core::{EngineError, Result, RoundConfig, RoundRng, RoundRngState};

/// Turn state machine for the matching game.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    catalog: TermCatalog,
    config: RoundConfig,
    rng: RoundRng,
    state: RoundState,
    history: Vector<RoundRecord>,
}

impl RoundEngine {
    /// Create an engine in the Idle phase with a zero score.
    ///
    /// Seeds from `config.seed` when set, otherwise from the OS.
    pub fn new(catalog: TermCatalog, config: RoundConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => RoundRng::new(seed),
            None => RoundRng::from_entropy(),
        };
        debug!(
            seed = rng.seed(),
            catalog_size = catalog.size(),
            "round engine created"
        );
        Ok(Self {
            state: RoundState::new(config.round_seconds),
            catalog,
            config,
            rng,
            history: Vector::new(),
        })
    }

    /// Engine over the shipped AI vocabulary.
    pub fn with_builtin_catalog(config: RoundConfig) -> Result<Self> {
        Self::new(TermCatalog::builtin(), config)
    }

    // === Operations ===

    /// Flip the card: deal a new round.
    ///
    /// Returns `Ok(None)` if a round is already active. Fails with
    /// `InsufficientCatalog` if the catalog cannot fill a round; the state
    /// is left untouched in that case.
    pub fn start_round(&mut self) -> Result<Option<RoundSnapshot>> {
        if self.state.is_active() {
            return Ok(None);
        }

        let (term, candidates) = match deal(&self.catalog, &self.config, &mut self.rng) {
            Ok(dealt) => dealt,
            Err(err) => {
                if let EngineError::InsufficientCatalog { required, available } = &err {
                    warn!(required, available, "catalog too small to deal a round");
                }
                return Err(err);
            }
        };

        debug!(term = %term.term, candidates = candidates.len(), "round started");
        self.state.activate(term, candidates, self.config.round_seconds);
        Ok(self.state.snapshot())
    }

    /// Advance the countdown by one second.
    ///
    /// Reaching zero ends the round as a timeout.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_active() {
            return TickOutcome::Ignored;
        }

        let remaining = self.state.count_down();
        if remaining > 0 {
            return TickOutcome::Running {
                remaining_seconds: remaining,
            };
        }

        match self.expire() {
            Some(outcome) => TickOutcome::Expired(outcome),
            None => TickOutcome::Ignored,
        }
    }

    /// Score a picked definition and end the round.
    ///
    /// Returns `None` while Idle.
    pub fn answer(&mut self, chosen: &str) -> Option<RoundOutcome> {
        let term = self.state.current_term()?;

        let outcome = if term.matches(chosen) {
            RoundOutcome::Correct {
                delta: i64::from(self.state.remaining_seconds())
                    .saturating_mul(self.config.points_per_second),
            }
        } else {
            RoundOutcome::Incorrect {
                delta: self.config.wrong_answer_penalty.saturating_neg(),
            }
        };

        self.state.apply_delta(outcome.delta());
        self.finish_round(outcome);
        Some(outcome)
    }

    /// End an active round whose countdown has reached zero.
    ///
    /// Returns `None` if no round is active or time remains.
    pub fn expire(&mut self) -> Option<RoundOutcome> {
        if !self.state.is_active() || self.state.remaining_seconds() > 0 {
            return None;
        }
        let outcome = RoundOutcome::Timeout;
        self.finish_round(outcome);
        Some(outcome)
    }

    fn finish_round(&mut self, outcome: RoundOutcome) {
        let term = self
            .state
            .current_term()
            .map(|t| t.term.clone())
            .unwrap_or_default();

        self.state.reset_to_idle(self.config.round_seconds);

        let record = RoundRecord {
            round: self.state.rounds_played(),
            term,
            outcome,
            score_after: self.state.score(),
        };
        info!(
            round = record.round,
            term = %record.term,
            delta = outcome.delta(),
            score = record.score_after,
            timeout = outcome.is_timeout(),
            "round finished"
        );
        self.history.push_back(record);
    }

    // === Accessors ===

    /// Read-only view of the whole state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// The active round, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.state.snapshot()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Running score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.state.score()
    }

    /// Finished rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// The term catalog.
    #[must_use]
    pub fn catalog(&self) -> &TermCatalog {
        &self.catalog
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// RNG checkpoint, for replaying the same sequence of deals.
    #[must_use]
    pub fn rng_state(&self) -> RoundRngState {
        self.rng.state()
    }

    /// Resume dealing from a checkpoint taken with `rng_state`.
    pub fn restore_rng(&mut self, state: &RoundRngState) {
        self.rng = RoundRng::from_state(state);
    }
}
