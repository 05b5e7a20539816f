use std::time::Instant;

/// Source of elapsed time in seconds.
pub trait Clock {
    /// Returns seconds elapsed since this clock's epoch.
    fn now(&mut self) -> f64;
}

/// Wall clock backed by `Instant`; the epoch is the moment of construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&mut self) -> f64 {
        Instant::now()
            .saturating_duration_since(self.epoch)
            .as_secs_f64()
    }
}

/// Deterministic clock.
///
/// Every `now()` first advances the time by `step`, then returns it, so a clock
/// built with `with_step(0.01)` reads `0.01, 0.02, 0.03, ...`. A step of zero
/// gives a frozen clock that only moves through `advance`/`set`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualClock {
    time: f64,
    step: f64,
}

impl ManualClock {
    /// Frozen clock at `time`.
    pub fn at(time: f64) -> Self {
        Self { time, step: 0.0 }
    }

    /// Clock starting at zero that advances `step` seconds per read.
    pub fn with_step(step: f64) -> Self {
        Self { time: 0.0, step }
    }

    pub fn set(&mut self, time: f64) {
        self.time = time;
    }

    pub fn advance(&mut self, dt: f64) {
        self.time += dt;
    }

    /// Current time without advancing.
    pub fn peek(&self) -> f64 {
        self.time
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> f64 {
        self.time += self.step;
        self.time
    }
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now(&mut self) -> f64 {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_clock_advances_before_read() {
        let mut c = ManualClock::with_step(0.5);
        assert_eq!(c.now(), 0.5);
        assert_eq!(c.now(), 1.0);
        assert_eq!(c.peek(), 1.0);
    }

    #[test]
    fn frozen_clock_repeats() {
        let mut c = ManualClock::at(3.0);
        assert_eq!(c.now(), 3.0);
        assert_eq!(c.now(), 3.0);
        c.advance(0.25);
        assert_eq!(c.now(), 3.25);
        c.set(1.0);
        assert_eq!(c.now(), 1.0);
    }

    #[test]
    fn monotonic_clock_never_goes_back() {
        let mut c = MonotonicClock::new();
        let a = c.now();
        let b = c.now();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
