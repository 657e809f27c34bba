//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use chrono::Utc;
use futures::stream::{self, Stream, StreamExt};
use tracing::{debug, error, info, warn};

use crate::{
    controls::{Preset, Shortcut},
    state::{AppState, TimerSnapshot},
};
use super::responses::{
    ApiResponse, DurationEditResponse, DurationRequest, HealthResponse, StatusResponse,
};

type ActionResult = Result<Json<ApiResponse>, StatusCode>;

fn respond(result: Result<TimerSnapshot, String>, action: &str, message: String) -> ActionResult {
    match result {
        Ok(timer) => {
            info!("{} endpoint called - {}", action, message);
            Ok(Json(ApiResponse::for_timer(message, timer)))
        }
        Err(e) => {
            error!("Failed to handle {}: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start-stop - Start, pause, or restart the countdown
pub async fn start_stop_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    let result = state.start_or_stop();
    let message = match &result {
        Ok(timer) if timer.running => "Countdown running".to_string(),
        _ => "Countdown paused".to_string(),
    };
    respond(result, "start-stop", message)
}

/// Handle POST /reset - Stop and rewind the countdown
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond(state.reset(), "reset", "Countdown reset".to_string())
}

/// Handle POST /preset/:name - Switch to a preset duration
pub async fn preset_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ActionResult {
    let preset: Preset = name.parse().map_err(|e| {
        warn!("{}", e);
        StatusCode::NOT_FOUND
    })?;

    respond(
        state.apply_preset(preset),
        "preset",
        format!("Duration set to {}", preset.label()),
    )
}

/// Handle POST /duration - Apply a duration typed into the settings field
pub async fn duration_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DurationRequest>,
) -> ActionResult {
    let result = state.set_duration_text(&request.duration);
    let message = match &result {
        Ok(timer) => format!("Duration set to {}", timer.duration_text),
        Err(_) => String::new(),
    };
    respond(result, "duration", message)
}

/// Handle POST /duration/edit - Pause for editing and return the current duration
pub async fn duration_edit_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DurationEditResponse>, StatusCode> {
    match state.begin_duration_edit() {
        Ok(duration) => Ok(Json(DurationEditResponse {
            duration,
            timestamp: Utc::now(),
        })),
        Err(e) => {
            error!("Failed to begin duration edit: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /add-minute - Lengthen the countdown by one minute
pub async fn add_minute_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond(state.add_minute(), "add-minute", "Added one minute".to_string())
}

/// Handle POST /remove-minute - Shorten the countdown by one minute
pub async fn remove_minute_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond(state.remove_minute(), "remove-minute", "Removed one minute".to_string())
}

/// Handle POST /key/:key - Forwarded key press from a display client
pub async fn key_handler(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> ActionResult {
    let Some(shortcut) = Shortcut::from_key(&key) else {
        debug!("Ignoring unmapped key: {}", key);
        return Err(StatusCode::NOT_FOUND);
    };

    respond(
        state.apply_shortcut(shortcut),
        "key",
        format!("Key '{}' mapped to {}", key, shortcut.action_name()),
    )
}

/// Handle GET /status - Return current timer and server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.get_timer_snapshot() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /events - Stream a snapshot on every timer change
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let mut rx = state.subscribe();
    let current = rx.borrow_and_update().clone();
    debug!("Event stream subscriber connected");

    let updates = stream::unfold(rx, |mut rx| async move {
        rx.changed().await.ok()?;
        let snapshot = rx.borrow_and_update().clone();
        Some((snapshot, rx))
    });

    let events = stream::iter([current])
        .chain(updates)
        .map(|snapshot| Event::default().event("timer").json_data(&snapshot));

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
