//! Converts elapsed time into discrete countdown ticks.

use std::time::Duration;

/// Fixed-interval tick source.
///
/// `start` anchors the ticker; `due` reports how many whole intervals
/// have passed since the last call and moves the anchor forward by that
/// many, so fractional time carries over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticker {
    interval: Duration,
    anchor: Option<Duration>,
}

impl Ticker {
    /// A stopped ticker with the given interval.
    ///
    /// Zero intervals are treated as one millisecond.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            anchor: None,
        }
    }

    /// One tick per second.
    #[must_use]
    pub fn per_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Start counting from `now`.
    pub fn start(&mut self, now: Duration) {
        self.anchor = Some(now);
    }

    /// Stop; `due` returns zero until restarted.
    pub fn stop(&mut self) {
        self.anchor = None;
    }

    /// Whole intervals elapsed since the anchor.
    pub fn due(&mut self, now: Duration) -> u32 {
        let Some(anchor) = self.anchor else {
            return 0;
        };
        let elapsed = now.saturating_sub(anchor);
        let ticks = elapsed.as_nanos() / self.interval.as_nanos();
        let ticks = u32::try_from(ticks).unwrap_or(u32::MAX);
        self.anchor = Some(anchor + self.interval * ticks);
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_stopped_ticker_never_due() {
        let mut ticker = Ticker::per_second();
        assert_eq!(ticker.due(ms(10_000)), 0);
    }

    #[test]
    fn test_fractions_carry_over() {
        let mut ticker = Ticker::per_second();
        ticker.start(ms(0));

        assert_eq!(ticker.due(ms(900)), 0);
        assert_eq!(ticker.due(ms(1_400)), 1);
        assert_eq!(ticker.due(ms(1_900)), 0);
        assert_eq!(ticker.due(ms(2_000)), 1);
        assert_eq!(ticker.due(ms(5_500)), 3);
    }

    #[test]
    fn test_stop_and_restart() {
        let mut ticker = Ticker::per_second();
        ticker.start(ms(0));
        ticker.stop();
        assert_eq!(ticker.due(ms(3_000)), 0);

        ticker.start(ms(3_000));
        assert_eq!(ticker.due(ms(3_999)), 0);
        assert_eq!(ticker.due(ms(4_000)), 1);
    }
}
