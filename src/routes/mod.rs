//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the session/navigation REST surface, the render-pass endpoints,
//! and the training websocket under a single Axum router. Every endpoint
//! except `/healthz` is scoped to a session id; unknown ids map to 404 in
//! the route handlers.

pub mod pages;
pub mod session;
pub mod training;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/session", post(session::create_session))
        .route(
            "/api/session/{id}",
            get(session::get_session).delete(session::delete_session),
        )
        .route("/api/session/{id}/navigate", post(session::navigate))
        .route("/api/session/{id}/tab", post(session::select_tab))
        .route("/api/session/{id}/agent", patch(session::patch_agent))
        .route("/api/session/{id}/actions/{action}", post(session::run_action))
        .route("/api/session/{id}/page", get(pages::page))
        .route("/api/session/{id}/sidebar", get(pages::sidebar))
        .route("/api/session/{id}/network", get(pages::network))
        .route("/api/session/{id}/training/start", post(training::start))
        .route("/api/session/{id}/training/cancel", post(training::cancel))
        .route("/api/session/{id}/training/ws", get(training::handle_ws))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
