//! Elapsed time accumulation across start/stop cycles

use std::sync::Arc;
use tracing::debug;

use super::TimerState;
use crate::clock::Clock;

/// Owns the start/stop state and reports elapsed milliseconds.
///
/// Time spent running is accumulated across cycles; while stopped the
/// reported value is frozen.
pub struct ElapsedTimeSource {
    clock: Arc<dyn Clock>,
    running: bool,
    accumulated_ms: i64,
    started_at_ms: i64,
}

impl ElapsedTimeSource {
    /// Create a stopped source at zero, reading time from `clock`
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            running: false,
            accumulated_ms: 0,
            started_at_ms: 0,
        }
    }

    /// Flip between running and stopped. Returns the new running state.
    pub fn toggle_running(&mut self) -> bool {
        let now = self.clock.now_ms();
        if self.running {
            self.accumulated_ms += self.since_start(now);
            self.running = false;
            debug!("Stopwatch stopped at {}ms", self.accumulated_ms);
        } else {
            self.started_at_ms = now;
            self.running = true;
            debug!("Stopwatch started from {}ms", self.accumulated_ms);
        }
        self.running
    }

    /// Elapsed milliseconds, including the current run if any
    pub fn elapsed_ms(&self) -> i64 {
        if self.running {
            self.accumulated_ms + self.since_start(self.clock.now_ms())
        } else {
            self.accumulated_ms
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn snapshot(&self) -> TimerState {
        TimerState {
            running: self.running,
            elapsed_ms: self.elapsed_ms(),
        }
    }

    // A clock that steps backwards counts as zero time.
    fn since_start(&self, now: i64) -> i64 {
        (now - self.started_at_ms).max(0)
    }
}

impl std::fmt::Debug for ElapsedTimeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElapsedTimeSource")
            .field("running", &self.running)
            .field("accumulated_ms", &self.accumulated_ms)
            .field("started_at_ms", &self.started_at_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn source() -> (ManualClock, ElapsedTimeSource) {
        let clock = ManualClock::new();
        let source = ElapsedTimeSource::new(Arc::new(clock.clone()));
        (clock, source)
    }

    #[test]
    fn starts_stopped_at_zero() {
        let (clock, source) = source();
        clock.advance(5000);
        assert_eq!(source.snapshot(), TimerState::new());
    }

    #[test]
    fn start_run_stop_freezes_elapsed() {
        let (clock, mut source) = source();
        assert!(source.toggle_running());
        assert_eq!(source.elapsed_ms(), 0);

        clock.advance(700);
        assert_eq!(source.elapsed_ms(), 700);
        clock.advance(800);
        assert_eq!(source.elapsed_ms(), 1500);

        assert!(!source.toggle_running());
        assert_eq!(source.elapsed_ms(), 1500);
        clock.advance(10_000);
        assert_eq!(source.elapsed_ms(), 1500);
    }

    #[test]
    fn accumulates_only_running_intervals() {
        let (clock, mut source) = source();
        let runs = [(120, 30), (1000, 4000), (1, 0), (59_999, 17)];
        let mut expected = 0;
        for (running, paused) in runs {
            source.toggle_running();
            clock.advance(running);
            source.toggle_running();
            clock.advance(paused);
            expected += running;
            assert_eq!(source.elapsed_ms(), expected);
        }
        assert!(!source.is_running());
    }

    #[test]
    fn backwards_clock_step_never_goes_negative() {
        let (clock, mut source) = source();
        clock.set(10_000);
        source.toggle_running();
        clock.set(9_000);
        assert_eq!(source.elapsed_ms(), 0);
        source.toggle_running();
        assert_eq!(source.elapsed_ms(), 0);
    }
}
