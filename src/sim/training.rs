//! Closed-form training curves for the epoch animation.
//!
//! DESIGN
//! ======
//! No model is trained. Each step is a pure function of the 1-based epoch
//! number plus bounded jitter: accuracy and F1 ramp linearly against a
//! 20-epoch scale, loss decays exponentially from 1.5. The ramp scale is
//! fixed; only the number of animated steps is capped (configurable, see
//! `DashConfig::training_epoch_cap`).
//!
//! With the default cap, accuracy peaks at 0.95 + 0.02 jitter and F1 at
//! 0.93 + 0.02, so neither can exceed 1.0; jitter can pull late-epoch loss
//! slightly below zero, which is cosmetic.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Batch sizes the training form offers.
pub const ALLOWED_BATCH_SIZES: [u32; 5] = [16, 32, 64, 128, 256];

/// Upper bound on requested (pre-cap) epochs.
pub const MAX_REQUESTED_EPOCHS: u32 = 1000;

const DEFAULT_EPOCHS: u32 = 100;
const DEFAULT_BATCH_SIZE: u32 = 64;

/// Epoch scale the accuracy/F1 ramps and the demo constants assume.
const RAMP_EPOCHS: f64 = 20.0;

// =============================================================================
// SPEC
// =============================================================================

/// Training corpus selector. Display-only; every dataset produces the same
/// curves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    #[default]
    CustomerServiceCalls,
    TechnicalSupport,
    SalesInquiries,
    Custom,
}

/// Validated parameters for one training run.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TrainingSpec {
    #[serde(default = "default_epochs")]
    pub epochs: u32,
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
    #[serde(default)]
    pub dataset: Dataset,
}

fn default_epochs() -> u32 {
    DEFAULT_EPOCHS
}

fn default_batch_size() -> u32 {
    DEFAULT_BATCH_SIZE
}

impl Default for TrainingSpec {
    fn default() -> Self {
        Self { epochs: DEFAULT_EPOCHS, batch_size: DEFAULT_BATCH_SIZE, dataset: Dataset::default() }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("epochs must be between 1 and {MAX_REQUESTED_EPOCHS}")]
    EpochsOutOfRange(u32),
    #[error("unsupported batch size {0} (allowed: 16, 32, 64, 128, 256)")]
    UnsupportedBatchSize(u32),
}

impl TrainingSpec {
    /// Check form bounds: epochs in 1..=1000, batch size from the fixed set.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.epochs == 0 || self.epochs > MAX_REQUESTED_EPOCHS {
            return Err(SpecError::EpochsOutOfRange(self.epochs));
        }
        if !ALLOWED_BATCH_SIZES.contains(&self.batch_size) {
            return Err(SpecError::UnsupportedBatchSize(self.batch_size));
        }
        Ok(())
    }

    /// Number of steps the animation will actually run.
    #[must_use]
    pub fn planned_epochs(&self, cap: u32) -> u32 {
        self.epochs.min(cap.max(1))
    }
}

// =============================================================================
// STEPS
// =============================================================================

/// Metrics for one animated epoch. `epoch` is 1-based; `progress` reaches
/// exactly 1.0 on the final planned epoch.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TrainingStep {
    pub epoch: u32,
    pub planned_epochs: u32,
    pub accuracy: f64,
    pub loss: f64,
    pub f1: f64,
    pub progress: f64,
    /// Display deltas shown beside each gauge.
    pub accuracy_delta_pct: f64,
    pub loss_delta: f64,
    pub f1_delta: f64,
}

/// Compute the step for 1-based `epoch` of a run of `planned` epochs.
///
/// accuracy(e) = 0.6  + (e/20)*0.35 + U(-0.02, 0.02)
/// loss(e)     = 1.5 * exp(-e/8)    + U(-0.1,  0.1)
/// f1(e)       = 0.55 + (e/20)*0.38 + U(-0.02, 0.02)
/// progress(e) = e / planned
pub fn training_step(rng: &mut impl Rng, epoch: u32, planned: u32) -> TrainingStep {
    let e = f64::from(epoch);
    TrainingStep {
        epoch,
        planned_epochs: planned,
        accuracy: 0.6 + (e / RAMP_EPOCHS) * 0.35 + rng.random_range(-0.02..=0.02),
        loss: 1.5 * (-e / 8.0).exp() + rng.random_range(-0.1..=0.1),
        f1: 0.55 + (e / RAMP_EPOCHS) * 0.38 + rng.random_range(-0.02..=0.02),
        progress: e / f64::from(planned.max(1)),
        accuracy_delta_pct: rng.random_range(0.5..=2.0),
        loss_delta: rng.random_range(-0.05..=-0.01),
        f1_delta: rng.random_range(0.005..=0.02),
    }
}

#[cfg(test)]
#[path = "training_test.rs"]
mod tests;
