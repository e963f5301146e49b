use super::*;

use std::time::Duration;

use futures_util::StreamExt;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite;

use crate::config::DashConfig;
use crate::sim::training::Dataset;
use crate::state::test_helpers::{seed_session, test_app_state};

fn spec(epochs: u32, batch_size: u32) -> TrainingSpec {
    TrainingSpec { epochs, batch_size, dataset: Dataset::default() }
}

/// State with a real pacing delay, for tests that need the run to still be
/// live when they act on it.
fn slow_state() -> AppState {
    let config = DashConfig {
        training_step_delay: Duration::from_millis(50),
        ..DashConfig::default()
    };
    AppState::new(config)
}

#[tokio::test]
async fn start_accepts_and_reports_the_truncated_plan() {
    let state = test_app_state();
    let session_id = seed_session(&state).await;

    let (status, Json(started)) = start(State(state), Path(session_id), Json(spec(500, 64)))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(started.requested_epochs, 500);
    assert_eq!(started.planned_epochs, 20);
}

#[tokio::test]
async fn duplicate_start_is_409() {
    let state = slow_state();
    let session_id = seed_session(&state).await;

    start(State(state.clone()), Path(session_id), Json(spec(10, 64)))
        .await
        .unwrap();
    let err = start(State(state), Path(session_id), Json(spec(10, 64)))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::CONFLICT);
}

#[tokio::test]
async fn invalid_spec_is_400() {
    let state = test_app_state();
    let session_id = seed_session(&state).await;

    let err = start(State(state), Path(session_id), Json(spec(10, 48)))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cancel_without_a_run_is_404() {
    let state = test_app_state();
    let session_id = seed_session(&state).await;

    let err = cancel(State(state), Path(session_id)).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cancel_on_unknown_session_is_404() {
    let state = test_app_state();
    let err = cancel(State(state), Path(Uuid::new_v4())).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[test]
fn training_error_to_status_covers_every_variant() {
    assert_eq!(
        training_error_to_status(TrainingError::SessionNotFound(Uuid::nil())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(training_error_to_status(TrainingError::NotRunning), StatusCode::NOT_FOUND);
    assert_eq!(training_error_to_status(TrainingError::AlreadyRunning), StatusCode::CONFLICT);
}

// =============================================================================
// end-to-end websocket
// =============================================================================

async fn serve(state: AppState) -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = crate::routes::app(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn ws_streams_the_full_run_end_to_end() {
    let state = test_app_state();
    let session_id = seed_session(&state).await;
    training::start(&state, session_id, spec(5, 32)).await.unwrap();

    let addr = serve(state).await;
    let url = format!("ws://{addr}/api/session/{session_id}/training/ws");
    let (mut socket, _) = tokio_tungstenite::connect_async(&url).await.unwrap();

    let mut started = false;
    let mut steps = 0;
    let mut completed = false;
    while let Some(msg) = timeout(Duration::from_secs(2), socket.next())
        .await
        .expect("ws stream timed out")
    {
        let tungstenite::Message::Text(text) = msg.unwrap() else {
            continue;
        };
        let value: serde_json::Value = serde_json::from_str(text.as_str()).unwrap();
        match value["event"].as_str().unwrap() {
            "started" => started = true,
            "step" => steps += 1,
            "completed" => {
                assert_eq!(value["epochs_run"], 5);
                completed = true;
                break;
            }
            other => panic!("unexpected event {other}"),
        }
    }

    assert!(started);
    assert_eq!(steps, 5);
    assert!(completed);
}

#[tokio::test]
async fn ws_on_session_without_a_run_is_rejected() {
    let state = test_app_state();
    let session_id = seed_session(&state).await;

    let addr = serve(state).await;
    let url = format!("ws://{addr}/api/session/{session_id}/training/ws");
    let err = tokio_tungstenite::connect_async(&url).await.unwrap_err();
    match err {
        tungstenite::Error::Http(response) => assert_eq!(response.status(), 404),
        other => panic!("expected http rejection, got {other}"),
    }
}
