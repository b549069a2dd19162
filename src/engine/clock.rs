//! Fixed-cadence step accumulator

use std::time::Duration;

/// Accumulates elapsed time and reports how many simulation steps are due
///
/// The remainder below one interval is carried over rather than reset, so
/// the cadence stays phase-accurate no matter how irregularly the driver
/// feeds elapsed time in.
#[derive(Debug, Clone)]
pub struct StepClock {
    interval: Duration,
    accumulated: Duration,
}

impl StepClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add elapsed time and return the number of whole intervals crossed
    pub fn advance_due(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;

        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
        }
        due
    }

    /// Drop any accumulated remainder
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_step_before_interval() {
        let mut clock = StepClock::new(Duration::from_millis(100));
        assert_eq!(clock.advance_due(Duration::from_millis(99)), 0);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = StepClock::new(Duration::from_millis(100));

        // 60 + 60 = 120: one step due, 20ms carried
        assert_eq!(clock.advance_due(Duration::from_millis(60)), 0);
        assert_eq!(clock.advance_due(Duration::from_millis(60)), 1);

        // Carried 20ms means 80ms completes the next interval
        assert_eq!(clock.advance_due(Duration::from_millis(80)), 1);
    }

    #[test]
    fn test_long_stall_yields_multiple_steps() {
        let mut clock = StepClock::new(Duration::from_millis(100));
        assert_eq!(clock.advance_due(Duration::from_millis(350)), 3);
        assert_eq!(clock.advance_due(Duration::from_millis(50)), 1);
    }

    #[test]
    fn test_reset_drops_remainder() {
        let mut clock = StepClock::new(Duration::from_millis(100));
        clock.advance_due(Duration::from_millis(90));
        clock.reset();
        assert_eq!(clock.advance_due(Duration::from_millis(90)), 0);
    }
}
