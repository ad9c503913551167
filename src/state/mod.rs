//! State management module
//!
//! This module contains the stopwatch state and the shared application state.

pub mod app_state;
pub mod elapsed;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use elapsed::ElapsedTimeSource;
pub use timer_state::TimerState;
