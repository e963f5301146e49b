//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the runtime config and a map of live sessions. Each session
//! owns its navigation state, agent configuration, and (at most one)
//! running training animation. There are no ambient globals: every page
//! handler receives the session it operates on.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::DashConfig;
use crate::nav::NavState;
use crate::services::training::TrainingHandle;

// =============================================================================
// AGENT PROFILE
// =============================================================================

/// Learning-rate options the config form offers.
pub const LEARNING_RATES: [f64; 4] = [0.0001, 0.001, 0.01, 0.1];

/// Safety filter level. Decorative, like the rest of the profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyLevel {
    Low,
    Medium,
    #[default]
    High,
    Maximum,
}

/// AI agent configuration sliders. Values are clamped into their declared
/// ranges on every patch; the learning rate snaps to the nearest offered
/// option.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    /// 5..=20
    pub hidden_layers: u32,
    /// 64..=512
    pub neurons_per_layer: u32,
    /// One of [`LEARNING_RATES`].
    pub learning_rate: f64,
    /// 50..=1000
    pub response_speed_ms: u32,
    /// 1000..=10000
    pub context_window: u32,
    /// 0.1..=2.0
    pub temperature: f64,
    pub safety_level: SafetyLevel,
    pub monitoring: bool,
    pub auto_learning: bool,
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self {
            hidden_layers: 12,
            neurons_per_layer: 256,
            learning_rate: 0.001,
            response_speed_ms: 200,
            context_window: 4000,
            temperature: 0.7,
            safety_level: SafetyLevel::High,
            monitoring: true,
            auto_learning: true,
        }
    }
}

/// Partial update for [`AgentProfile`]; absent fields are untouched.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentPatch {
    pub hidden_layers: Option<u32>,
    pub neurons_per_layer: Option<u32>,
    pub learning_rate: Option<f64>,
    pub response_speed_ms: Option<u32>,
    pub context_window: Option<u32>,
    pub temperature: Option<f64>,
    pub safety_level: Option<SafetyLevel>,
    pub monitoring: Option<bool>,
    pub auto_learning: Option<bool>,
}

impl AgentProfile {
    /// Apply a patch, clamping out-of-range values into their ranges.
    pub fn apply(&mut self, patch: AgentPatch) {
        if let Some(v) = patch.hidden_layers {
            self.hidden_layers = v.clamp(5, 20);
        }
        if let Some(v) = patch.neurons_per_layer {
            self.neurons_per_layer = v.clamp(64, 512);
        }
        if let Some(v) = patch.learning_rate {
            self.learning_rate = snap_learning_rate(v);
        }
        if let Some(v) = patch.response_speed_ms {
            self.response_speed_ms = v.clamp(50, 1000);
        }
        if let Some(v) = patch.context_window {
            self.context_window = v.clamp(1000, 10_000);
        }
        if let Some(v) = patch.temperature {
            self.temperature = v.clamp(0.1, 2.0);
        }
        if let Some(v) = patch.safety_level {
            self.safety_level = v;
        }
        if let Some(v) = patch.monitoring {
            self.monitoring = v;
        }
        if let Some(v) = patch.auto_learning {
            self.auto_learning = v;
        }
    }
}

/// Nearest offered learning rate to the requested value.
fn snap_learning_rate(requested: f64) -> f64 {
    LEARNING_RATES
        .into_iter()
        .min_by(|a, b| {
            (a - requested)
                .abs()
                .partial_cmp(&(b - requested).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(0.001)
}

// =============================================================================
// SESSION
// =============================================================================

/// Per-session live state. Exists only for the lifetime of the interactive
/// session; nothing here is persisted.
pub struct Session {
    /// Current page and per-page sub-tabs.
    pub nav: NavState,
    /// Neural Control sliders.
    pub agent: AgentProfile,
    /// Live (or most recently finished) training run, if any.
    pub training: Option<TrainingHandle>,
    /// Last operation timestamp, for the idle sweeper.
    pub last_seen: Instant,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nav: NavState::default(),
            agent: AgentProfile::default(),
            training: None,
            last_seen: Instant::now(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    pub config: DashConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: DashConfig) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), config }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::time::Duration;

    /// Create a test `AppState` with instant training steps.
    #[must_use]
    pub fn test_app_state() -> AppState {
        let config = DashConfig { training_step_delay: Duration::ZERO, ..DashConfig::default() };
        AppState::new(config)
    }

    /// Seed an empty session into the app state and return its ID.
    pub async fn seed_session(state: &AppState) -> Uuid {
        let session_id = Uuid::new_v4();
        let mut sessions = state.sessions.write().await;
        sessions.insert(session_id, Session::new());
        session_id
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
