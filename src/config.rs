//! Runtime configuration from environment variables.
//!
//! DESIGN
//! ======
//! Everything tunable lives here so the hard-coded demo constants (most
//! notably the 20-epoch training cap) are explicit and overridable. Values
//! come from env vars with sane defaults; a malformed value silently falls
//! back to the default rather than failing startup.

use std::time::Duration;

const DEFAULT_TRAINING_EPOCH_CAP: u32 = 20;
const DEFAULT_TRAINING_STEP_MS: u64 = 300;
const DEFAULT_SESSION_IDLE_SECS: u64 = 1800;

/// Server-wide tuning knobs, shared through `AppState`.
#[derive(Clone, Copy, Debug)]
pub struct DashConfig {
    /// Upper bound on animated training epochs per run. Requests above the
    /// cap are truncated and the truncated count is reported to the client.
    pub training_epoch_cap: u32,
    /// Pacing delay between training steps.
    pub training_step_delay: Duration,
    /// Sessions idle longer than this are swept.
    pub session_idle_ttl: Duration,
}

impl DashConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            training_epoch_cap: env_parse("TRAINING_EPOCH_CAP", DEFAULT_TRAINING_EPOCH_CAP).max(1),
            training_step_delay: Duration::from_millis(env_parse("TRAINING_STEP_MS", DEFAULT_TRAINING_STEP_MS)),
            session_idle_ttl: Duration::from_secs(env_parse("SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)),
        }
    }
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            training_epoch_cap: DEFAULT_TRAINING_EPOCH_CAP,
            training_step_delay: Duration::from_millis(DEFAULT_TRAINING_STEP_MS),
            session_idle_ttl: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
