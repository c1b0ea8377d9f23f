use std::time::{Duration, Instant};

/// Source of elapsed animation time, in milliseconds since some start instant.
pub trait Clock {
    fn elapsed_millis(&self) -> f64;
}

/// Monotonic stopwatch started at construction.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start_new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Restart timing from now.
    pub fn restart(&mut self) {
        self.start = Instant::now();
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start_new()
    }
}

impl Clock for Stopwatch {
    fn elapsed_millis(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock pinned to a chosen time. Useful for reproducible frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedClock {
    millis: f64,
}

impl FixedClock {
    pub fn new(millis: f64) -> Self {
        Self { millis }
    }

    pub fn set(&mut self, millis: f64) {
        self.millis = millis;
    }

    /// Move time forward by `delta_ms`.
    pub fn advance(&mut self, delta_ms: f64) {
        self.millis += delta_ms;
    }
}

impl Clock for FixedClock {
    fn elapsed_millis(&self) -> f64 {
        self.millis
    }
}
