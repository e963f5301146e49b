//! Training routes — start/cancel plus the event websocket.
//!
//! DESIGN
//! ======
//! Start and cancel are plain REST over the training service. The websocket
//! is read-only: on upgrade it replays the run's backlog, then forwards live
//! events (dropping the replayed overlap by sequence number) until the
//! terminal event, then closes. Subscribing to a finished run replays its
//! full history and closes immediately.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tokio::sync::broadcast;
use tracing::warn;
use uuid::Uuid;

use crate::services::training::{self, StartedRun, TrainingError, TrainingEvent, TrainingFeed};
use crate::sim::training::TrainingSpec;
use crate::state::AppState;

/// `POST /api/session/:id/training/start` — validate and start a run.
///
/// Returns 202 with the truncated epoch plan; 409 if a run is already live.
pub async fn start(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(spec): Json<TrainingSpec>,
) -> Result<(StatusCode, Json<StartedRun>), StatusCode> {
    let started = training::start(&state, session_id, spec)
        .await
        .map_err(training_error_to_status)?;
    Ok((StatusCode::ACCEPTED, Json(started)))
}

/// `POST /api/session/:id/training/cancel` — cancel the live run.
pub async fn cancel(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    training::cancel(&state, session_id)
        .await
        .map_err(training_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `GET /api/session/:id/training/ws` — stream the run's events as JSON.
pub async fn handle_ws(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    ws: WebSocketUpgrade,
) -> Response {
    match training::subscribe(&state, session_id).await {
        Ok(feed) => ws.on_upgrade(move |socket| stream_events(socket, feed)),
        Err(err) => training_error_to_status(err).into_response(),
    }
}

async fn stream_events(mut socket: WebSocket, feed: TrainingFeed) {
    let TrainingFeed { backlog, mut live } = feed;
    let replayed = backlog.len() as u64;

    let mut terminal_seen = false;
    for event in backlog {
        terminal_seen = event.is_terminal();
        if send_event(&mut socket, &event).await.is_err() {
            return;
        }
    }

    while !terminal_seen {
        tokio::select! {
            received = live.recv() => match received {
                Ok((seq, _)) if seq < replayed => {}
                Ok((_, event)) => {
                    if send_event(&mut socket, &event).await.is_err() {
                        return;
                    }
                    terminal_seen = event.is_terminal();
                }
                // Lag can only skip Step events; keep going for the terminal.
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "training ws subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            msg = socket.recv() => match msg {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => return,
                Some(Ok(_)) => {}
            },
        }
    }

    let _ = socket.send(Message::Close(None)).await;
}

async fn send_event(socket: &mut WebSocket, event: &TrainingEvent) -> Result<(), ()> {
    let json = match serde_json::to_string(event) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "training ws: failed to serialize event");
            return Err(());
        }
    };
    socket.send(Message::Text(json.into())).await.map_err(|_| ())
}

pub(crate) fn training_error_to_status(err: TrainingError) -> StatusCode {
    match err {
        TrainingError::SessionNotFound(_) | TrainingError::NotRunning => StatusCode::NOT_FOUND,
        TrainingError::InvalidSpec(_) => StatusCode::BAD_REQUEST,
        TrainingError::AlreadyRunning => StatusCode::CONFLICT,
    }
}

#[cfg(test)]
#[path = "training_test.rs"]
mod tests;
