//! Idle-session sweeper.
//!
//! DESIGN
//! ======
//! A background task wakes once a minute and drops sessions that have not
//! seen an operation within the configured TTL. Dropping a session drops
//! its training handle, which raises the cancel flag on any runner still
//! going, so nothing leaks.

use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::info;

use crate::state::AppState;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Spawn the background sweep task. Returns a handle for shutdown.
pub fn spawn_sweeper_task(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            sweep_idle(&state, Instant::now()).await;
        }
    })
}

/// Drop every session idle longer than the configured TTL.
async fn sweep_idle(state: &AppState, now: Instant) {
    let ttl = state.config.session_idle_ttl;
    let mut sessions = state.sessions.write().await;
    let before = sessions.len();
    sessions.retain(|_, session| now.duration_since(session.last_seen) <= ttl);

    let swept = before - sessions.len();
    if swept > 0 {
        info!(swept, remaining = sessions.len(), "idle sessions swept");
    }
}

#[cfg(test)]
#[path = "sweeper_test.rs"]
mod tests;
