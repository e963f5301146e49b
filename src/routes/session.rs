//! Session lifecycle, navigation, and quick-action routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::nav::{NavState, Page, Tab};
use crate::services::session as sessions;
use crate::services::session::{SessionError, SessionSnapshot};
use crate::state::{AgentPatch, AgentProfile, AppState};

// =============================================================================
// LIFECYCLE
// =============================================================================

#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

/// `POST /api/session` — open a fresh dashboard session.
pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = sessions::create(&state).await;
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id }))
}

/// `GET /api/session/:id` — snapshot navigation, profile, and training status.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    let snapshot = sessions::snapshot(&state, session_id)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(snapshot))
}

/// `DELETE /api/session/:id` — end a session.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    sessions::remove(&state, session_id)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

// =============================================================================
// NAVIGATION
// =============================================================================

#[derive(Deserialize)]
pub struct NavigateBody {
    pub page: Page,
}

/// `POST /api/session/:id/navigate` — switch to a page.
pub async fn navigate(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(body): Json<NavigateBody>,
) -> Result<Json<NavState>, StatusCode> {
    let nav = sessions::navigate(&state, session_id, body.page)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(nav))
}

/// `POST /api/session/:id/tab` — select a sub-tab on its owning page.
pub async fn select_tab(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(tab): Json<Tab>,
) -> Result<Json<NavState>, StatusCode> {
    let nav = sessions::select_tab(&state, session_id, tab)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(nav))
}

/// `PATCH /api/session/:id/agent` — patch the agent profile.
pub async fn patch_agent(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(patch): Json<AgentPatch>,
) -> Result<Json<AgentProfile>, StatusCode> {
    let agent = sessions::update_agent(&state, session_id, patch)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(agent))
}

// =============================================================================
// QUICK ACTIONS
// =============================================================================

/// Dashboard button. Closed set: unknown names are rejected at the path
/// boundary with a 400.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashAction {
    ConnectAgent,
    ViewDashboard,
    DailyReport,
    WeeklySummary,
    MonthlyAnalysis,
    PauseTraining,
    ResetModel,
    SaveModel,
    RefreshModels,
    DeployModel,
    ImportModel,
    CleanupModels,
    Emergency,
    Restart,
    Export,
    Security,
}

/// How the ack should be styled by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
}

/// Acknowledgement copy for a fired action.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ActionAck {
    pub action: DashAction,
    pub severity: Severity,
    pub message: &'static str,
}

/// `POST /api/session/:id/actions/:action` — fire a dashboard button.
///
/// Actions are cosmetic: they touch the session and return ack copy, they
/// never mutate state.
pub async fn run_action(
    State(state): State<AppState>,
    Path((session_id, action)): Path<(Uuid, DashAction)>,
) -> Result<Json<ActionAck>, StatusCode> {
    sessions::touch(&state, session_id)
        .await
        .map_err(session_error_to_status)?;
    info!(%session_id, ?action, "action fired");
    Ok(Json(ack_for(action)))
}

pub(crate) fn ack_for(action: DashAction) -> ActionAck {
    let (severity, message) = match action {
        DashAction::ConnectAgent => (Severity::Success, "Neural link established. AI agent online."),
        DashAction::ViewDashboard => (Severity::Info, "Dashboard view engaged."),
        DashAction::DailyReport => (Severity::Info, "Daily report compiled."),
        DashAction::WeeklySummary => (Severity::Info, "Weekly summary compiled."),
        DashAction::MonthlyAnalysis => (Severity::Info, "Monthly analysis compiled."),
        DashAction::PauseTraining => (Severity::Warning, "Training paused. Model state preserved."),
        DashAction::ResetModel => (Severity::Warning, "Model reset to last checkpoint."),
        DashAction::SaveModel => (Severity::Success, "Model checkpoint saved."),
        DashAction::RefreshModels => (Severity::Info, "Model registry refreshed."),
        DashAction::DeployModel => (Severity::Success, "Model deployed to production."),
        DashAction::ImportModel => (Severity::Info, "Model import scheduled."),
        DashAction::CleanupModels => (Severity::Info, "Stale model artifacts removed."),
        DashAction::Emergency => (Severity::Warning, "Emergency protocol armed. All calls rerouted."),
        DashAction::Restart => (Severity::Warning, "System restart scheduled."),
        DashAction::Export => (Severity::Success, "Data export queued."),
        DashAction::Security => (Severity::Info, "Security scan started. No threats detected."),
    };
    ActionAck { action, severity, message }
}

pub(crate) fn session_error_to_status(err: SessionError) -> StatusCode {
    match err {
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
