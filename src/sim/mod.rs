//! Synthetic data generators.
//!
//! Nothing in here touches real telemetry: every value is drawn fresh from
//! a bounded distribution (or a sinusoid plus bounded noise) on each call
//! and discarded after the render pass that requested it. Generators take
//! `&mut impl Rng` so callers own the randomness source.

pub mod metrics;
pub mod network;
pub mod training;
