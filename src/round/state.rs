//! Round state and read-only snapshots.
//!
//! ## RoundState
//!
//! The single mutable record the engine owns: phase, the dealt round,
//! countdown, and running score. Fields are private; the engine is the
//! only writer, so partial updates cannot be observed.
//!
//! ## RoundSnapshot
//!
//! An owned copy of the dealt round (term, candidates, countdown) for
//! callers to render.

use serde::{Deserialize, Serialize};

use super::deal::Candidates;
use crate::catalog::TermEntry;

/// Engine phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the card to be flipped.
    #[default]
    Idle,
    /// A round is dealt and the countdown is running.
    Active,
}

/// The engine's complete mutable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    phase: Phase,
    current_term: Option<TermEntry>,
    candidates: Candidates,
    remaining_seconds: u32,
    score: i64,
    last_delta: Option<i64>,
    rounds_played: u32,
}

impl RoundState {
    /// Fresh session state: Idle, zero score, full countdown.
    #[must_use]
    pub fn new(round_seconds: u32) -> Self {
        Self {
            phase: Phase::Idle,
            current_term: None,
            candidates: Candidates::new(),
            remaining_seconds: round_seconds,
            score: 0,
            last_delta: None,
            rounds_played: 0,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a round is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// The dealt term. `None` while Idle.
    #[must_use]
    pub fn current_term(&self) -> Option<&TermEntry> {
        self.current_term.as_ref()
    }

    /// Shuffled candidate definitions. Empty while Idle.
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Running score across rounds. May be negative.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// The most recent score change from an answer.
    ///
    /// Timeouts leave this untouched.
    #[must_use]
    pub fn last_delta(&self) -> Option<i64> {
        self.last_delta
    }

    /// Rounds that have ended, by answer or timeout.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Owned copy of the dealt round, if one is active.
    #[must_use]
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        let term = self.current_term.clone()?;
        Some(RoundSnapshot {
            term,
            candidates: self.candidates.clone(),
            remaining_seconds: self.remaining_seconds,
        })
    }

    // === Transitions (engine only) ===

    pub(super) fn activate(&mut self, term: TermEntry, candidates: Candidates, seconds: u32) {
        debug_assert_eq!(self.phase, Phase::Idle);
        self.current_term = Some(term);
        self.candidates = candidates;
        self.remaining_seconds = seconds;
        self.phase = Phase::Active;
    }

    /// Decrement the countdown, returning the new value.
    pub(super) fn count_down(&mut self) -> u32 {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds
    }

    /// Add a score change. The running total saturates at the `i64` range.
    pub(super) fn apply_delta(&mut self, delta: i64) {
        self.score = self.score.saturating_add(delta);
        self.last_delta = Some(delta);
    }

    pub(super) fn reset_to_idle(&mut self, round_seconds: u32) {
        self.phase = Phase::Idle;
        self.current_term = None;
        self.candidates.clear();
        self.remaining_seconds = round_seconds;
        self.rounds_played += 1;
    }
}

/// A dealt round as shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// The term on the card face.
    pub term: TermEntry,

    /// Shuffled candidate definitions, exactly one of them correct.
    pub candidates: Candidates,

    /// Seconds left when the snapshot was taken.
    pub remaining_seconds: u32,
}
