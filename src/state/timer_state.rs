//! Timer state structure

use serde::{Deserialize, Serialize};

/// Snapshot of the stopwatch: whether it runs and how much time it has counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub running: bool,
    pub elapsed_ms: i64,
}

impl TimerState {
    /// Create a stopped timer at zero
    pub fn new() -> Self {
        Self {
            running: false,
            elapsed_ms: 0,
        }
    }

    /// Check if the timer is running
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
