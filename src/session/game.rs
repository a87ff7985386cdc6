//! Game session: UI intents in, render-ready view out.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::ticker::Ticker;
use crate::catalog::TermCatalog;
use crate::core::{Result, RoundConfig};
use crate::round::{Phase, RoundEngine, RoundOutcome, TickOutcome};

/// Card face text while no round is active.
pub const CARD_BACK_TEXT: &str = "Click to Flip";

/// Transient score feedback shown after an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Feedback {
    /// Rendered delta, e.g. `+150` or `-50`.
    pub text: String,
    /// The score change.
    pub delta: i64,
    #[serde(skip)]
    shown_at: Duration,
}

/// Everything a UI needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub phase: Phase,
    pub score: i64,
    pub remaining_seconds: u32,
    /// The term while Active, `CARD_BACK_TEXT` while Idle.
    pub card_face: String,
    /// Candidate definitions, empty while Idle.
    pub candidates: Vec<String>,
    /// Transient delta text, cleared after the feedback duration.
    pub feedback: Option<String>,
    /// Non-blocking notice for the last timeout.
    pub notice: Option<String>,
}

/// One player's session over a single round engine.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use term_match::core::RoundConfig;
/// use term_match::session::{GameSession, ManualClock};
///
/// let clock = ManualClock::new();
/// let mut session =
///     GameSession::with_clock(RoundConfig::default().with_seed(1), &clock).unwrap();
///
/// session.on_card_click().unwrap();
/// clock.advance(Duration::from_secs(3));
/// session.poll();
/// assert_eq!(session.view().remaining_seconds, 17);
/// ```
#[derive(Debug)]
pub struct GameSession<C: Clock = SystemClock> {
    engine: RoundEngine,
    clock: C,
    ticker: Ticker,
    feedback_duration: Duration,
    feedback: Option<Feedback>,
    notice: Option<String>,
}

impl GameSession<SystemClock> {
    /// Session over the built-in catalog using the wall clock.
    pub fn new(config: RoundConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> GameSession<C> {
    /// Session over the built-in catalog with an injected clock.
    pub fn with_clock(config: RoundConfig, clock: C) -> Result<Self> {
        Self::with_catalog(TermCatalog::builtin(), config, clock)
    }

    /// Session over a custom catalog with an injected clock.
    pub fn with_catalog(catalog: TermCatalog, config: RoundConfig, clock: C) -> Result<Self> {
        let feedback_duration = config.feedback_duration();
        Ok(Self {
            engine: RoundEngine::new(catalog, config)?,
            clock,
            ticker: Ticker::per_second(),
            feedback_duration,
            feedback: None,
            notice: None,
        })
    }

    // === UI intents ===

    /// Flip the card. Starts a round only while Idle.
    ///
    /// Returns whether a round was started. A click that lands after the
    /// countdown ran out only settles the timeout.
    pub fn on_card_click(&mut self) -> Result<bool> {
        if self.poll().is_some() || self.engine.phase() == Phase::Active {
            return Ok(false);
        }
        if self.engine.start_round()?.is_none() {
            return Ok(false);
        }
        self.ticker.start(self.clock.now());
        self.notice = None;
        Ok(true)
    }

    /// Pick a definition by its text.
    ///
    /// Returns `None` if no round is active, including one that ran out
    /// before the pick arrived.
    pub fn on_definition_click(&mut self, definition: &str) -> Option<RoundOutcome> {
        if self.poll().is_some() {
            return None;
        }
        self.submit(definition)
    }

    /// Pick a definition by its position in the candidate list.
    pub fn on_candidate_click(&mut self, index: usize) -> Option<RoundOutcome> {
        if self.poll().is_some() {
            return None;
        }
        let definition = self.engine.state().candidates().get(index)?.clone();
        self.submit(&definition)
    }

    fn submit(&mut self, definition: &str) -> Option<RoundOutcome> {
        let outcome = self.engine.answer(definition)?;
        self.ticker.stop();
        self.feedback = Some(Feedback {
            text: outcome.feedback_text(),
            delta: outcome.delta(),
            shown_at: self.clock.now(),
        });
        Some(outcome)
    }

    /// One countdown tick.
    pub fn on_timer_tick(&mut self) -> TickOutcome {
        let outcome = self.engine.tick();
        if let TickOutcome::Expired(round) = outcome {
            self.ticker.stop();
            self.notice = Some(round.feedback_text());
            debug!("round timed out");
        }
        outcome
    }

    /// Catch up with the clock.
    ///
    /// Delivers one tick per elapsed second and clears feedback that has
    /// been visible long enough. Returns the timeout if one happened.
    pub fn poll(&mut self) -> Option<RoundOutcome> {
        let now = self.clock.now();
        let mut expired = None;

        for _ in 0..self.ticker.due(now) {
            if let TickOutcome::Expired(outcome) = self.on_timer_tick() {
                expired = Some(outcome);
                break;
            }
        }

        if self
            .feedback
            .as_ref()
            .is_some_and(|f| now.saturating_sub(f.shown_at) >= self.feedback_duration)
        {
            self.feedback = None;
        }

        expired
    }

    // === Display ===

    /// Render-ready state.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let state = self.engine.state();
        SessionView {
            phase: state.phase(),
            score: state.score(),
            remaining_seconds: state.remaining_seconds(),
            card_face: state
                .current_term()
                .map_or_else(|| CARD_BACK_TEXT.to_string(), |t| t.term.clone()),
            candidates: state.candidates().to_vec(),
            feedback: self.feedback.as_ref().map(|f| f.text.clone()),
            notice: self.notice.clone(),
        }
    }

    /// Current transient feedback.
    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// The injected clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
