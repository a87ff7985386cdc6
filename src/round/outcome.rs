//! Round outcomes returned to the caller.

use serde::{Deserialize, Serialize};

/// Notice shown when the countdown runs out.
pub const TIMEOUT_NOTICE: &str = "Time's up! Try again.";

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The right definition was picked. `delta` is remaining seconds times
    /// the per-second reward.
    Correct { delta: i64 },
    /// A wrong definition was picked. `delta` is the negated penalty.
    Incorrect { delta: i64 },
    /// The countdown reached zero. Score is unchanged.
    Timeout,
}

impl RoundOutcome {
    /// Score change this outcome applied.
    #[must_use]
    pub fn delta(&self) -> i64 {
        match self {
            RoundOutcome::Correct { delta } | RoundOutcome::Incorrect { delta } => *delta,
            RoundOutcome::Timeout => 0,
        }
    }

    /// True for a timed-out round.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, RoundOutcome::Timeout)
    }

    /// Short text for transient feedback: `+150`, `-50`, or the timeout notice.
    #[must_use]
    pub fn feedback_text(&self) -> String {
        match self {
            RoundOutcome::Correct { delta } => format!("+{delta}"),
            RoundOutcome::Incorrect { delta } => format!("{delta}"),
            RoundOutcome::Timeout => TIMEOUT_NOTICE.to_string(),
        }
    }
}

/// Result of a single countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// No round was active; nothing changed.
    Ignored,
    /// The countdown moved and the round is still running.
    Running { remaining_seconds: u32 },
    /// The countdown reached zero and the round ended.
    Expired(RoundOutcome),
}

/// One finished round, kept in the engine's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: u32,

    /// The term that was dealt.
    pub term: String,

    /// How the round ended.
    pub outcome: RoundOutcome,

    /// Running score after this round.
    pub score_after: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta() {
        assert_eq!(RoundOutcome::Correct { delta: 150 }.delta(), 150);
        assert_eq!(RoundOutcome::Incorrect { delta: -50 }.delta(), -50);
        assert_eq!(RoundOutcome::Timeout.delta(), 0);
    }

    #[test]
    fn test_feedback_text() {
        assert_eq!(RoundOutcome::Correct { delta: 150 }.feedback_text(), "+150");
        assert_eq!(RoundOutcome::Correct { delta: 0 }.feedback_text(), "+0");
        assert_eq!(RoundOutcome::Incorrect { delta: -50 }.feedback_text(), "-50");
        assert_eq!(RoundOutcome::Timeout.feedback_text(), TIMEOUT_NOTICE);
    }

    #[test]
    fn test_outcome_serde() {
        let outcome = RoundOutcome::Incorrect { delta: -50 };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"Incorrect":{"delta":-50}}"#);
        let back: RoundOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
