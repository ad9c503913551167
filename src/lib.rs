//! Dial Stopwatch - A stopwatch service with a radial tick dial
//!
//! The stopwatch accumulates elapsed time across start/stop cycles. A dial of
//! tick marks is laid out once on a circle inside its container, and while the
//! stopwatch runs a background task re-renders the readout and the blanked
//! tick every `1000 / tick_count` milliseconds.

pub mod api;
pub mod clock;
pub mod config;
pub mod layout;
pub mod render;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::Config;
pub use layout::{compute_placements, ContainerMetrics, DialAnchor, DialLayout, Placement, RadialLayoutEngine, TickImage};
pub use render::{render, Frame, RefreshState};
pub use state::{AppState, ElapsedTimeSource, TimerState};
pub use utils::signals::shutdown_signal;
