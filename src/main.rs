//! Dial Stopwatch - A stopwatch service with a radial tick dial
//!
//! This is the main entry point for the dial-stopwatch application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use dial_stopwatch::{
    api::create_router,
    clock::MonotonicClock,
    config::Config,
    layout::RadialLayoutEngine,
    state::{AppState, ElapsedTimeSource},
    tasks::spawn_refresh_task,
    utils::shutdown_signal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("dial_stopwatch={},tower_http=info", config.log_level()))
        .init();

    info!("Starting dial-stopwatch server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, ticks={}, anchor={:?}",
          config.host, config.port, config.ticks, config.anchor);

    // Compose the stopwatch from its parts
    let timer = ElapsedTimeSource::new(Arc::new(MonotonicClock::new()));
    let engine = RadialLayoutEngine::new(config.tick_count(), config.anchor);
    let state = Arc::new(AppState::new(config.port, config.host.clone(), timer, engine));

    // Start the periodic refresh background task
    let refresh = spawn_refresh_task(Arc::clone(&state));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /toggle - Start or stop the stopwatch");
    info!("  GET  /frame  - Latest rendered frame");
    info!("  POST /layout - Report container size, get tick placements");
    info!("  GET  /layout - Stored tick placements");
    info!("  GET  /status - Current stopwatch status");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    refresh.abort();
    info!("Server shutdown complete");
    Ok(())
}
