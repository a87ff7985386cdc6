//! Round engine configuration.
//!
//! Defaults reproduce the classic game: a 20 second countdown, 10 points
//! per remaining second for a correct pick, a flat 50 point penalty for a
//! wrong one, and four distractors next to the correct definition.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// How distractor definitions are chosen from the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistractorPolicy {
    /// The first N non-matching entries in catalog order.
    ///
    /// With a five-entry catalog every other entry is always shown.
    #[default]
    Positional,
    /// N non-matching entries sampled uniformly at random.
    Sampled,
}

/// Round engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Countdown length in whole seconds.
    pub round_seconds: u32,

    /// Points awarded per remaining second on a correct answer.
    pub points_per_second: i64,

    /// Points removed on an incorrect answer (stored positive).
    pub wrong_answer_penalty: i64,

    /// Number of incorrect definitions shown alongside the correct one.
    pub distractor_count: usize,

    /// How long transient score feedback stays visible, in milliseconds.
    pub feedback_duration_ms: u64,

    /// Distractor selection strategy.
    pub distractor_policy: DistractorPolicy,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            round_seconds: 20,
            points_per_second: 10,
            wrong_answer_penalty: 50,
            distractor_count: 4,
            feedback_duration_ms: 1000,
            distractor_policy: DistractorPolicy::Positional,
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Parse a TOML document. Missing keys fall back to defaults.
    ///
    /// ```
    /// use term_match::core::RoundConfig;
    ///
    /// let config = RoundConfig::from_toml_str("round_seconds = 30\nseed = 7").unwrap();
    /// assert_eq!(config.round_seconds, 30);
    /// assert_eq!(config.seed, Some(7));
    /// assert_eq!(config.distractor_count, 4);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a playable round.
    pub fn validate(&self) -> Result<()> {
        if self.round_seconds == 0 {
            return Err(EngineError::InvalidConfig(
                "round_seconds must be at least 1".to_string(),
            ));
        }
        if self.distractor_count == 0 {
            return Err(EngineError::InvalidConfig(
                "distractor_count must be at least 1".to_string(),
            ));
        }
        if self.points_per_second < 0 || self.wrong_answer_penalty < 0 {
            return Err(EngineError::InvalidConfig(
                "point values must not be negative".to_string(),
            ));
        }
        if self.max_correct_delta().is_none() {
            return Err(EngineError::InvalidConfig(
                "round_seconds * points_per_second overflows the score range".to_string(),
            ));
        }
        Ok(())
    }

    /// Largest reward a correct answer can earn, if it fits in an `i64`.
    #[must_use]
    pub fn max_correct_delta(&self) -> Option<i64> {
        i64::from(self.round_seconds).checked_mul(self.points_per_second)
    }

    /// Candidates per round: distractors plus the correct definition.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.distractor_count + 1
    }

    /// Feedback display duration.
    #[must_use]
    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_duration_ms)
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the countdown length.
    #[must_use]
    pub fn with_round_seconds(mut self, seconds: u32) -> Self {
        self.round_seconds = seconds;
        self
    }

    /// Set the number of distractors.
    #[must_use]
    pub fn with_distractor_count(mut self, count: usize) -> Self {
        self.distractor_count = count;
        self
    }

    /// Set the distractor selection strategy.
    #[must_use]
    pub fn with_distractor_policy(mut self, policy: DistractorPolicy) -> Self {
        self.distractor_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoundConfig::default();
        assert_eq!(config.round_seconds, 20);
        assert_eq!(config.points_per_second, 10);
        assert_eq!(config.wrong_answer_penalty, 50);
        assert_eq!(config.candidate_count(), 5);
        assert_eq!(config.feedback_duration(), Duration::from_secs(1));
        assert_eq!(config.distractor_policy, DistractorPolicy::Positional);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RoundConfig::default()
            .with_seed(123)
            .with_round_seconds(5)
            .with_distractor_count(2)
            .with_distractor_policy(DistractorPolicy::Sampled);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.round_seconds, 5);
        assert_eq!(config.candidate_count(), 3);
        assert_eq!(config.distractor_policy, DistractorPolicy::Sampled);
    }

    #[test]
    fn test_toml_policy() {
        let config = RoundConfig::from_toml_str("distractor_policy = \"sampled\"").unwrap();
        assert_eq!(config.distractor_policy, DistractorPolicy::Sampled);
    }

    #[test]
    fn test_toml_rejects_zero_seconds() {
        let err = RoundConfig::from_toml_str("round_seconds = 0").unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_toml_rejects_garbage() {
        let err = RoundConfig::from_toml_str("round_seconds = \"soon\"").unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_overflowing_reward() {
        let err = RoundConfig::from_toml_str(&format!("points_per_second = {}", i64::MAX))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));

        let config = RoundConfig {
            points_per_second: i64::MAX / 20,
            ..RoundConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.max_correct_delta(), Some(i64::MAX / 20 * 20));
    }

    #[test]
    fn test_max_penalty_is_valid() {
        let config = RoundConfig {
            wrong_answer_penalty: i64::MAX,
            ..RoundConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = RoundConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
