//! Meeting Timer - A countdown clock for public meetings
//!
//! This is the main entry point for the meeting-timer server.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use meeting_timer::{
    api::create_router,
    config::Config,
    display::render_duration,
    state::{AppState, DEFAULT_DURATION_SECONDS},
    tasks::countdown_ticker_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("meeting_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting meeting-timer server v{}", env!("CARGO_PKG_VERSION"));

    let preferences = config.preferences();
    match &preferences {
        Some(p) => info!("Preferences file: {}", p.path().display()),
        None => warn!("No config directory found, durations will not be saved"),
    }

    let duration = match config.duration_seconds() {
        Some(seconds) => {
            if let Some(p) = &preferences {
                if let Err(e) = p.save_duration(seconds.max(1)) {
                    warn!("Failed to save duration: {}", e);
                }
            }
            seconds
        }
        None => match &preferences {
            Some(p) => p.load_duration().unwrap_or_else(|e| {
                warn!("Failed to load saved duration: {}, using default", e);
                DEFAULT_DURATION_SECONDS
            }),
            None => DEFAULT_DURATION_SECONDS,
        },
    };

    info!("Configuration: host={}, port={}, duration={}",
          config.host, config.port, render_duration(duration.max(1)));

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), duration, preferences));

    // Start the countdown ticker background task
    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        countdown_ticker_task(ticker_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start-stop     - Start, pause or restart the countdown");
    info!("  POST /reset          - Stop and rewind the countdown");
    info!("  POST /preset/:name   - five-minutes, three-minutes or ten-seconds");
    info!("  POST /duration       - Set duration from {{\"duration\": \"M:SS\"}}");
    info!("  POST /duration/edit  - Pause and fetch the duration for editing");
    info!("  POST /add-minute     - Add one minute");
    info!("  POST /remove-minute  - Remove one minute");
    info!("  POST /key/:key       - Escape/Delete reset, Space/Return start or stop");
    info!("  GET  /status         - Current timer and server status");
    info!("  GET  /events         - Server-sent timer updates");
    info!("  GET  /health         - Health check");

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

    info!("Server shutdown complete");
    Ok(())
}
