//! Render-pass routes: current page, sidebar, activation map.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::routes::session::session_error_to_status;
use crate::services::session as sessions;
use crate::sim::network::{self, ActivationMap};
use crate::state::AppState;
use crate::views::{self, PageView, SidebarView};

/// `GET /api/session/:id/page` — render the session's current page+tab.
pub async fn page(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PageView>, StatusCode> {
    let snapshot = sessions::snapshot(&state, session_id)
        .await
        .map_err(session_error_to_status)?;
    let view = views::render(&mut rand::rng(), &snapshot.nav, &snapshot.agent, snapshot.training);
    Ok(Json(view))
}

/// `GET /api/session/:id/sidebar` — sidebar metrics and diagnostics.
pub async fn sidebar(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SidebarView>, StatusCode> {
    sessions::touch(&state, session_id)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(views::render_sidebar(&mut rand::rng())))
}

/// `GET /api/session/:id/network` — activation map sized by the session's
/// agent profile.
pub async fn network(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ActivationMap>, StatusCode> {
    let snapshot = sessions::snapshot(&state, session_id)
        .await
        .map_err(session_error_to_status)?;
    let map = network::activation_map(
        &mut rand::rng(),
        snapshot.agent.hidden_layers,
        snapshot.agent.neurons_per_layer,
    );
    Ok(Json(map))
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
