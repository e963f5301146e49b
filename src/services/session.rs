//! Session lifecycle and navigation operations.
//!
//! DESIGN
//! ======
//! Pure business logic over `AppState`: create/end sessions, apply
//! navigation events, patch the agent profile. Every operation touches the
//! session's `last_seen` so the idle sweeper leaves active sessions alone.
//! Handlers own input bounds here — numeric slider patches are clamped,
//! never rejected, matching the form widgets they stand in for.

use std::time::Instant;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::nav::{NavState, Page, Tab};
use crate::state::{AgentPatch, AgentProfile, AppState, Session};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown session {0}")]
    NotFound(Uuid),
}

/// Point-in-time view of a session for the snapshot endpoint.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SessionSnapshot {
    pub nav: NavState,
    pub agent: AgentProfile,
    pub training: Option<TrainingStatus>,
}

/// Status of the session's most recent training run, if any.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TrainingStatus {
    pub live: bool,
    pub planned_epochs: u32,
    pub batch_size: u32,
}

/// Create a fresh session at the default page and profile.
pub async fn create(state: &AppState) -> Uuid {
    let session_id = Uuid::new_v4();
    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id, Session::new());
    info!(%session_id, "session created");
    session_id
}

/// Snapshot a session's navigation, profile, and training status.
pub async fn snapshot(state: &AppState, session_id: Uuid) -> Result<SessionSnapshot, SessionError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or(SessionError::NotFound(session_id))?;
    session.last_seen = Instant::now();

    Ok(SessionSnapshot {
        nav: session.nav,
        agent: session.agent,
        training: session.training.as_ref().map(|run| TrainingStatus {
            live: !run.is_finished(),
            planned_epochs: run.planned_epochs,
            batch_size: run.spec.batch_size,
        }),
    })
}

/// Switch the session to a page.
pub async fn navigate(state: &AppState, session_id: Uuid, page: Page) -> Result<NavState, SessionError> {
    with_session(state, session_id, |session| {
        session.nav.navigate(page);
        info!(%session_id, page = page.as_str(), "navigated");
        session.nav
    })
    .await
}

/// Select a sub-tab (stored on its owning page).
pub async fn select_tab(state: &AppState, session_id: Uuid, tab: Tab) -> Result<NavState, SessionError> {
    with_session(state, session_id, |session| {
        session.nav.select_tab(tab);
        session.nav
    })
    .await
}

/// Patch the agent profile, clamping out-of-range values.
pub async fn update_agent(
    state: &AppState,
    session_id: Uuid,
    patch: AgentPatch,
) -> Result<AgentProfile, SessionError> {
    with_session(state, session_id, |session| {
        session.agent.apply(patch);
        session.agent
    })
    .await
}

/// Mark the session active without changing anything.
pub async fn touch(state: &AppState, session_id: Uuid) -> Result<(), SessionError> {
    with_session(state, session_id, |_| ()).await
}

/// End a session, dropping any live training run with it.
pub async fn remove(state: &AppState, session_id: Uuid) -> Result<(), SessionError> {
    let mut sessions = state.sessions.write().await;
    sessions
        .remove(&session_id)
        .map(|_| info!(%session_id, "session ended"))
        .ok_or(SessionError::NotFound(session_id))
}

/// Run `op` against the session under the write lock, touching `last_seen`.
async fn with_session<T>(
    state: &AppState,
    session_id: Uuid,
    op: impl FnOnce(&mut Session) -> T,
) -> Result<T, SessionError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or(SessionError::NotFound(session_id))?;
    session.last_seen = Instant::now();
    Ok(op(session))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
