//! Frame rendering for the periodic refresh
//!
//! A frame is everything the dial shows at one instant: the `MM:SS` readout,
//! the millisecond readout and which tick is blanked. The blank advances one
//! tick per `1000 / tick_count` ms and wraps once a second.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Whether the periodic refresh is scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshState {
    #[default]
    Stopped,
    Running,
}

impl From<bool> for RefreshState {
    fn from(running: bool) -> Self {
        if running {
            Self::Running
        } else {
            Self::Stopped
        }
    }
}

/// Rendered dial contents for one elapsed time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub elapsed_ms: i64,
    /// Minutes and seconds, `MM:SS`
    pub clock: String,
    /// Sub-second part, `mmm`
    pub millis: String,
    pub hidden_tick: Option<usize>,
    pub visible: Vec<bool>,
}

impl Frame {
    /// Frame shown before the first start: zero readout, every tick visible
    pub fn blank(tick_count: usize) -> Self {
        Self {
            elapsed_ms: 0,
            clock: "00:00".to_string(),
            millis: "000".to_string(),
            hidden_tick: None,
            visible: vec![true; tick_count],
        }
    }
}

/// Delay between refreshes: one tick's share of a second
pub fn refresh_period(tick_count: usize) -> Duration {
    let ticks = tick_count.max(1) as u64;
    Duration::from_millis((1000 / ticks).max(1))
}

/// Render the dial for `elapsed_ms`
pub fn render(elapsed_ms: i64, tick_count: usize) -> Frame {
    let elapsed = elapsed_ms.max(0);
    let minutes = (elapsed / 1000) / 60;
    let seconds = (elapsed / 1000) % 60;
    let sub_ms = elapsed % 1000;

    let visible: Vec<bool> = (0..tick_count)
        .map(|i| !tick_bucket_contains(i, tick_count, sub_ms))
        .collect();
    let hidden_tick = visible.iter().position(|shown| !shown);

    Frame {
        elapsed_ms: elapsed,
        clock: format!("{:02}:{:02}", minutes, seconds),
        millis: format!("{:03}", sub_ms),
        hidden_tick,
        visible,
    }
}

fn tick_bucket_contains(index: usize, tick_count: usize, sub_ms: i64) -> bool {
    let n = tick_count as i64;
    let i = index as i64;
    i * 1000 / n <= sub_ms && sub_ms < (i + 1) * 1000 / n
}
