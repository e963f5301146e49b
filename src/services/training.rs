//! Training runner — spawned, cancellable epoch animation.
//!
//! DESIGN
//! ======
//! The original dashboard blocked its render thread with a sleep-per-epoch
//! loop. Here each run is a spawned task that emits `TrainingEvent`s on a
//! broadcast channel, so any number of websocket subscribers can watch the
//! same run and the caller can cancel it mid-flight through a watch flag.
//!
//! Every event is also appended to a per-run backlog. A subscriber gets the
//! backlog plus the live stream, with sequence numbers to drop the overlap,
//! so connecting mid-run (or after the run finished) replays the full
//! history instead of hanging on an empty channel.
//!
//! LIFECYCLE
//! =========
//! 1. `start` validates the spec, truncates epochs at the configured cap,
//!    and spawns the runner (at most one live run per session).
//! 2. The runner emits `Started`, one `Step` per epoch with pacing delay,
//!    then `Completed` — or `Cancelled` if the flag fires first.
//! 3. The finished handle stays on the session (for status display and
//!    replay) until the next `start` replaces it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::info;
use uuid::Uuid;

use crate::sim::training::{Dataset, SpecError, TrainingSpec, TrainingStep, training_step};
use crate::state::AppState;

/// Broadcast buffer; ample for a capped run plus bookkeeping events.
const EVENT_BUFFER: usize = 64;

// =============================================================================
// EVENTS
// =============================================================================

/// Progress event emitted by a training run.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TrainingEvent {
    /// Run accepted; reports the truncated epoch count so clients never
    /// mistake the requested count for the animated one.
    Started { planned_epochs: u32, batch_size: u32, dataset: Dataset },
    /// One animated epoch.
    Step { step: TrainingStep },
    /// Terminal: every planned epoch ran.
    Completed { epochs_run: u32 },
    /// Terminal: cancelled after `epochs_run` epochs.
    Cancelled { epochs_run: u32 },
}

impl TrainingEvent {
    /// Whether this event ends the stream.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::Cancelled { .. })
    }
}

/// Backlog snapshot plus live tail of a run's event stream.
pub struct TrainingFeed {
    /// Events emitted before the subscription, in order.
    pub backlog: Vec<TrainingEvent>,
    /// Live events as `(seq, event)`; seq below `backlog.len()` duplicates
    /// a backlog entry and should be dropped.
    pub live: broadcast::Receiver<(u64, TrainingEvent)>,
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("unknown session {0}")]
    SessionNotFound(Uuid),
    #[error(transparent)]
    InvalidSpec(#[from] SpecError),
    #[error("a training run is already live for this session")]
    AlreadyRunning,
    #[error("no training run for this session")]
    NotRunning,
}

// =============================================================================
// HANDLE
// =============================================================================

/// Owner-side handle to a spawned run.
pub struct TrainingHandle {
    pub spec: TrainingSpec,
    pub planned_epochs: u32,
    events: broadcast::Sender<(u64, TrainingEvent)>,
    history: Arc<Mutex<Vec<TrainingEvent>>>,
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl TrainingHandle {
    /// Attach a new subscriber to the run's event stream.
    #[must_use]
    pub fn subscribe(&self) -> TrainingFeed {
        // Receiver before snapshot: anything emitted in between shows up in
        // both and is dropped by the seq check.
        let live = self.events.subscribe();
        let backlog = self
            .history
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();
        TrainingFeed { backlog, live }
    }

    /// Whether the runner task has exited (completed or cancelled).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Raise the cancel flag. The runner notices at its next pacing point.
    pub fn request_cancel(&self) {
        let _ = self.cancel.send(true);
    }
}

impl Drop for TrainingHandle {
    fn drop(&mut self) {
        // Dropping the handle (session removal) must not leak the runner.
        let _ = self.cancel.send(true);
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Summary returned to the caller of [`start`].
#[derive(Clone, Copy, Debug, Serialize)]
pub struct StartedRun {
    pub requested_epochs: u32,
    pub planned_epochs: u32,
    pub batch_size: u32,
    pub dataset: Dataset,
}

/// Validate and start a run for the session. At most one live run per
/// session; a finished handle is replaced.
pub async fn start(state: &AppState, session_id: Uuid, spec: TrainingSpec) -> Result<StartedRun, TrainingError> {
    spec.validate()?;
    let planned = spec.planned_epochs(state.config.training_epoch_cap);

    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or(TrainingError::SessionNotFound(session_id))?;

    if session.training.as_ref().is_some_and(|run| !run.is_finished()) {
        return Err(TrainingError::AlreadyRunning);
    }

    let handle = spawn_training(spec, planned, state.config.training_step_delay);
    session.training = Some(handle);
    session.last_seen = std::time::Instant::now();

    info!(%session_id, requested = spec.epochs, planned, batch_size = spec.batch_size, "training started");
    Ok(StartedRun {
        requested_epochs: spec.epochs,
        planned_epochs: planned,
        batch_size: spec.batch_size,
        dataset: spec.dataset,
    })
}

/// Cancel the session's live run.
pub async fn cancel(state: &AppState, session_id: Uuid) -> Result<(), TrainingError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or(TrainingError::SessionNotFound(session_id))?;

    match session.training.as_ref() {
        Some(run) if !run.is_finished() => {
            run.request_cancel();
            info!(%session_id, "training cancel requested");
            Ok(())
        }
        _ => Err(TrainingError::NotRunning),
    }
}

/// Subscribe to the session's current run, live or finished.
pub async fn subscribe(state: &AppState, session_id: Uuid) -> Result<TrainingFeed, TrainingError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or(TrainingError::SessionNotFound(session_id))?;
    session
        .training
        .as_ref()
        .map(TrainingHandle::subscribe)
        .ok_or(TrainingError::NotRunning)
}

// =============================================================================
// RUNNER
// =============================================================================

/// Spawn the runner task for an already-validated spec.
#[must_use]
pub fn spawn_training(spec: TrainingSpec, planned_epochs: u32, step_delay: Duration) -> TrainingHandle {
    let (event_tx, _) = broadcast::channel(EVENT_BUFFER);
    let (cancel_tx, cancel_rx) = watch::channel(false);
    let history = Arc::new(Mutex::new(Vec::new()));

    let task = tokio::spawn(run_training(
        spec,
        planned_epochs,
        step_delay,
        event_tx.clone(),
        Arc::clone(&history),
        cancel_rx,
    ));

    TrainingHandle { spec, planned_epochs, events: event_tx, history, cancel: cancel_tx, task }
}

async fn run_training(
    spec: TrainingSpec,
    planned: u32,
    step_delay: Duration,
    events: broadcast::Sender<(u64, TrainingEvent)>,
    history: Arc<Mutex<Vec<TrainingEvent>>>,
    mut cancel: watch::Receiver<bool>,
) {
    let emit = |event: TrainingEvent| {
        let mut log = history.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let seq = log.len() as u64;
        log.push(event);
        // Send errors mean no live subscriber; the backlog still records it.
        let _ = events.send((seq, event));
    };

    emit(TrainingEvent::Started {
        planned_epochs: planned,
        batch_size: spec.batch_size,
        dataset: spec.dataset,
    });

    for epoch in 1..=planned {
        emit(TrainingEvent::Step { step: training_step(&mut rand::rng(), epoch, planned) });

        if epoch == planned {
            break;
        }

        tokio::select! {
            () = tokio::time::sleep(step_delay) => {}
            changed = cancel.changed() => {
                // A dropped sender means the owning session is gone; stop
                // quietly. An explicit flag raise gets a terminal event.
                if changed.is_err() {
                    return;
                }
                if *cancel.borrow() {
                    emit(TrainingEvent::Cancelled { epochs_run: epoch });
                    info!(epochs_run = epoch, planned, "training cancelled");
                    return;
                }
            }
        }
    }

    emit(TrainingEvent::Completed { epochs_run: planned });
    info!(epochs_run = planned, "training complete");
}

#[cfg(test)]
#[path = "training_test.rs"]
mod tests;
