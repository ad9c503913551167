//! Periodic frame refresh background task

use std::sync::Arc;
use tokio::{
    sync::broadcast::{self, error::RecvError},
    task::JoinHandle,
    time::sleep,
};
use tracing::{debug, error, info, warn};

use crate::{render::RefreshState, state::AppState};

/// Subscribe to running-state changes and spawn the refresh task.
///
/// Subscribing happens before the spawn so no toggle made after this call
/// can be missed.
pub fn spawn_refresh_task(state: Arc<AppState>) -> JoinHandle<()> {
    let state_rx = state.refresh_state_tx.subscribe();
    tokio::spawn(refresh_task(state, state_rx))
}

/// Background task that refreshes the frame every period while running.
///
/// Each firing schedules the next one; a stop drops the pending sleep. The
/// synchronous refresh on each toggle is done by [`AppState::toggle`].
pub async fn refresh_task(state: Arc<AppState>, mut state_rx: broadcast::Receiver<RefreshState>) {
    let period = state.refresh_period();
    info!("Starting refresh task, period={}ms", period.as_millis());

    let mut refresh_state = current_refresh_state(&state);

    loop {
        match refresh_state {
            RefreshState::Stopped => match state_rx.recv().await {
                Ok(new_state) => refresh_state = new_state,
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Refresh task lagged by {} notifications, resyncing", skipped);
                    refresh_state = current_refresh_state(&state);
                }
                Err(RecvError::Closed) => break,
            },
            RefreshState::Running => {
                tokio::select! {
                    biased;

                    received = state_rx.recv() => match received {
                        Ok(new_state) => {
                            if new_state == RefreshState::Stopped {
                                debug!("Stopwatch stopped, cancelling pending refresh");
                            }
                            refresh_state = new_state;
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            warn!("Refresh task lagged by {} notifications, resyncing", skipped);
                            refresh_state = current_refresh_state(&state);
                        }
                        Err(RecvError::Closed) => break,
                    },

                    _ = sleep(period) => {
                        if let Err(e) = state.refresh() {
                            error!("Failed to refresh frame: {}", e);
                        }
                    }
                }
            }
        }
    }

    info!("Refresh task finished");
}

fn current_refresh_state(state: &AppState) -> RefreshState {
    match state.get_timer_state() {
        Ok(timer) => RefreshState::from(timer.is_running()),
        Err(e) => {
            error!("Failed to read timer state: {}", e);
            RefreshState::Stopped
        }
    }
}
