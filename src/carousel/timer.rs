//! Autoplay timer
//!
//! A recurring deadline driven by the event loop's elapsed time rather than a
//! background thread, so it can never fire concurrently with itself.

use std::time::Duration;

/// Recurring timer that fires once per `interval` of fed time.
///
/// The controller owns at most one of these. It is dropped and rebuilt
/// whenever the autoplay conditions change, so a fresh timer always starts
/// a full interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayTimer {
    interval: Duration,
    elapsed: Duration,
}

impl AutoplayTimer {
    /// Create a timer for a non-zero interval.
    ///
    /// Returns `None` for a zero interval, which would fire unboundedly.
    pub fn new(interval: Duration) -> Option<Self> {
        if interval.is_zero() {
            return None;
        }
        Some(Self {
            interval,
            elapsed: Duration::ZERO,
        })
    }

    /// The interval between fires
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next fire
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.elapsed)
    }

    /// Feed elapsed time and return how many times the timer fired.
    ///
    /// Leftover time carries into the next interval, so feeding 2600ms in
    /// 16ms slices fires exactly as often as feeding it in one call.
    pub fn feed(&mut self, dt: Duration) -> u64 {
        let interval = self.interval.as_nanos();
        let total = self.elapsed.as_nanos() + dt.as_nanos();
        let fires = total / interval;
        let rest = total % interval;

        self.elapsed = Duration::new(
            (rest / 1_000_000_000) as u64,
            (rest % 1_000_000_000) as u32,
        );

        u64::try_from(fires).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_has_no_timer() {
        assert!(AutoplayTimer::new(Duration::ZERO).is_none());
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut timer = AutoplayTimer::new(Duration::from_millis(2600)).unwrap();
        assert_eq!(timer.feed(Duration::from_millis(2599)), 0);
        assert_eq!(timer.feed(Duration::from_millis(1)), 1);
        assert_eq!(timer.feed(Duration::from_millis(5200)), 2);
    }

    #[test]
    fn test_sliced_feed_matches_single_feed() {
        let mut timer = AutoplayTimer::new(Duration::from_millis(2600)).unwrap();
        let mut fires = 0;
        for _ in 0..325 {
            fires += timer.feed(Duration::from_millis(16));
        }
        // 325 * 16 = 5200
        assert_eq!(fires, 2);
        assert_eq!(timer.remaining(), Duration::from_millis(2600));
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut timer = AutoplayTimer::new(Duration::from_millis(1000)).unwrap();
        timer.feed(Duration::from_millis(400));
        assert_eq!(timer.remaining(), Duration::from_millis(600));
        assert_eq!(timer.interval(), Duration::from_millis(1000));
    }
}
