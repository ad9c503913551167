//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use super::{ElapsedTimeSource, TimerState};
use crate::{
    clock::Clock,
    layout::{ContainerMetrics, DialAnchor, DialLayout, Placement, RadialLayoutEngine, TickImage},
    render::{self, Frame, RefreshState},
};

/// Shared stopwatch state: the time source, the dial layout and the frame
/// channel the refresh task publishes into
#[derive(Debug)]
pub struct AppState {
    /// Start/stop state and elapsed time
    pub timer: Arc<Mutex<ElapsedTimeSource>>,
    /// Tick placements, created once the container size is known
    pub dial: Arc<Mutex<DialLayout>>,
    pub tick_count: usize,
    pub anchor: DialAnchor,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Running/stopped notifications for the refresh task
    pub refresh_state_tx: broadcast::Sender<RefreshState>,
    /// Latest rendered frame
    pub frame_tx: watch::Sender<Frame>,
    /// Keep the receiver alive to prevent channel closure
    pub _frame_rx: watch::Receiver<Frame>,
}

impl AppState {
    /// Compose the state from an explicit time source and layout engine
    pub fn new(
        port: u16,
        host: String,
        timer: ElapsedTimeSource,
        engine: RadialLayoutEngine,
    ) -> Self {
        let tick_count = engine.tick_count();
        let anchor = engine.anchor();
        let (refresh_state_tx, _) = broadcast::channel(16);
        let (frame_tx, frame_rx) = watch::channel(Frame::blank(tick_count));

        Self {
            timer: Arc::new(Mutex::new(timer)),
            dial: Arc::new(Mutex::new(DialLayout::new(engine))),
            tick_count,
            anchor,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            refresh_state_tx,
            frame_tx,
            _frame_rx: frame_rx,
        }
    }

    /// Convenience constructor reading time from `clock`
    pub fn with_clock(
        port: u16,
        host: String,
        clock: Arc<dyn Clock>,
        engine: RadialLayoutEngine,
    ) -> Self {
        Self::new(port, host, ElapsedTimeSource::new(clock), engine)
    }

    /// Flip the stopwatch and refresh the frame once, synchronously.
    ///
    /// The refresh task is then told to start or stop its periodic refresh.
    /// The notification is sent under the timer lock so notifications arrive
    /// in the same order as the state changes.
    pub fn toggle(&self) -> Result<(bool, Frame), String> {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))?;

        let running = timer.toggle_running();
        info!("Stopwatch {}", if running { "started" } else { "stopped" });

        let frame = self.publish(timer.elapsed_ms());

        if let Err(e) = self.refresh_state_tx.send(RefreshState::from(running)) {
            // No refresh task subscribed; frames are still refreshed on toggle.
            warn!("Failed to send refresh state notification: {}", e);
        }
        drop(timer);

        self.record_action(if running { "start" } else { "stop" });
        Ok((running, frame))
    }

    /// Render the current elapsed time and publish it
    pub fn refresh(&self) -> Result<Frame, String> {
        let timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))?;

        // Published under the lock so a stale frame cannot land after a toggle.
        Ok(self.publish(timer.elapsed_ms()))
    }

    fn publish(&self, elapsed_ms: i64) -> Frame {
        let frame = render::render(elapsed_ms, self.tick_count);
        debug!("Refresh: {}.{} hidden={:?}", frame.clock, frame.millis, frame.hidden_tick);

        self.frame_tx.send_replace(frame.clone());
        frame
    }

    /// Handle the container's "size known" event
    pub fn layout(&self, metrics: &ContainerMetrics, image: &TickImage) -> Result<(Vec<Placement>, bool), String> {
        let mut dial = self.dial.lock()
            .map_err(|e| format!("Failed to lock dial layout: {}", e))?;

        let (placements, created) = dial.on_size_known(metrics, image);
        if created {
            info!("Laid out {} ticks in {}x{} container", placements.len(), metrics.width, metrics.height);
            self.record_action("layout");
        } else {
            debug!("Dial already laid out, ignoring size event");
        }
        Ok((placements.to_vec(), created))
    }

    /// Stored placements, if the layout has happened
    pub fn placements(&self) -> Result<Option<Vec<Placement>>, String> {
        self.dial.lock()
            .map(|dial| dial.placements().map(<[Placement]>::to_vec))
            .map_err(|e| format!("Failed to lock dial layout: {}", e))
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.timer.lock()
            .map(|timer| timer.snapshot())
            .map_err(|e| format!("Failed to lock timer: {}", e))
    }

    /// Latest published frame
    pub fn current_frame(&self) -> Frame {
        self.frame_tx.borrow().clone()
    }

    pub fn refresh_period(&self) -> Duration {
        render::refresh_period(self.tick_count)
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }
}
