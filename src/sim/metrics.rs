//! Call-center metric generators.
//!
//! DESIGN
//! ======
//! Each generator documents its output bounds and guarantees the exact
//! record count it was asked for. Noise is allowed to nudge a value past
//! its natural ceiling (satisfaction above 99, loss-adjacent series below
//! zero); that is cosmetic and owned by the display layer.

use std::f64::consts::TAU;

use rand::Rng;
use serde::Serialize;

/// Fixed category labels for the performance overview bar chart.
const PERFORMANCE_CATEGORIES: [&str; 4] = ["Response Time", "Satisfaction", "Resolution", "Efficiency"];

/// Fixed category labels for the live call distribution pie chart.
const CALL_CATEGORIES: [&str; 5] = ["Technical", "Billing", "Sales", "Support", "General"];

// =============================================================================
// RECORD TYPES
// =============================================================================

/// Headline gauge values for the analytics dashboard, with display deltas.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct MetricSample {
    pub active_calls: i64,
    pub active_calls_delta: i64,
    pub avg_response_secs: f64,
    pub avg_response_delta: f64,
    pub satisfaction_pct: f64,
    pub resolution_pct: f64,
}

/// One hourly bucket of simulated call volume.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct HourlyVolume {
    pub hour: u32,
    pub calls: f64,
}

/// Labeled score for the performance overview chart.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryScore {
    pub category: &'static str,
    pub score: u32,
}

/// Labeled count for the call distribution chart.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryCount {
    pub category: &'static str,
    pub count: u32,
}

/// Flat display row for the agent performance chart.
#[derive(Clone, Debug, Serialize)]
pub struct AgentRecord {
    pub id: String,
    pub performance: u32,
}

/// One day of the recent-performance report table.
#[derive(Clone, Debug, Serialize)]
pub struct ReportRow {
    pub day: String,
    pub calls_handled: u32,
    pub avg_response_secs: f64,
    pub satisfaction_pct: f64,
}

/// One day of the 90-day trend chart.
#[derive(Clone, Debug, Serialize)]
pub struct TrendPoint {
    pub day: String,
    pub call_volume: f64,
    pub response_secs: f64,
    pub satisfaction_pct: f64,
}

/// Deployment state shown in the model registry table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelStatus {
    Active,
    Standby,
    Training,
}

/// Flat display row for the model registry table.
#[derive(Clone, Debug, Serialize)]
pub struct ModelRecord {
    pub name: &'static str,
    pub version: &'static str,
    pub accuracy_pct: f64,
    pub status: ModelStatus,
    pub last_updated: String,
}

/// Host-level numbers for the status terminals and sidebar diagnostics.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SystemStatus {
    pub cpu_pct: u32,
    pub ram_pct: u32,
    pub latency_ms: u32,
    pub queued_calls: u32,
    pub active_agents: u32,
    pub model_accuracy_pct: f64,
}

/// Live figures for the neural monitoring terminals.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct NeuralMonitor {
    pub networks_online: u32,
    pub networks_total: u32,
    pub gpu_pct: u32,
    pub memory_gb: f64,
    pub memory_total_gb: u32,
    pub cache_hit_pct: f64,
    pub latency_ms: u32,
    pub throughput_rps: u32,
}

/// "Current model performance" gauges on the training tab.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ModelGauges {
    pub accuracy_pct: f64,
    pub accuracy_delta_pct: f64,
    pub loss: f64,
    pub loss_delta: f64,
    pub f1: f64,
    pub f1_delta: f64,
}

/// Compact live metrics for the sidebar status box.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SidebarMetrics {
    pub calls: u32,
    pub calls_delta: i64,
    pub agents: u32,
    pub load_pct: u32,
    pub load_delta: i64,
    pub response_secs: f64,
}

// =============================================================================
// GENERATORS
// =============================================================================

/// Headline dashboard gauges.
///
/// Bounds: active calls 1100..=1400 (delta -30..=30), response 0.2..=0.8s
/// (delta -0.1..=0.1), satisfaction 94..=99%, resolution 92..=97%.
pub fn dashboard_snapshot(rng: &mut impl Rng) -> MetricSample {
    MetricSample {
        active_calls: rng.random_range(1100..=1400),
        active_calls_delta: rng.random_range(-30..=30),
        avg_response_secs: rng.random_range(0.2..=0.8),
        avg_response_delta: rng.random_range(-0.1..=0.1),
        satisfaction_pct: rng.random_range(94.0..=99.0),
        resolution_pct: rng.random_range(92.0..=97.0),
    }
}

/// Call volume over `hours` hourly buckets: a daily sinusoid centered on
/// 300 calls with amplitude 200 and uniform jitter of +/-50.
pub fn hourly_call_volume(rng: &mut impl Rng, hours: u32) -> Vec<HourlyVolume> {
    (0..hours)
        .map(|hour| {
            let base = 300.0 + 200.0 * (f64::from(hour) / f64::from(hours.max(1)) * TAU).sin();
            HourlyVolume { hour, calls: base + f64::from(rng.random_range(-50..=50)) }
        })
        .collect()
}

/// Four fixed performance categories, scores 85..=99.
pub fn performance_overview(rng: &mut impl Rng) -> Vec<CategoryScore> {
    PERFORMANCE_CATEGORIES
        .into_iter()
        .map(|category| CategoryScore { category, score: rng.random_range(85..=99) })
        .collect()
}

/// Live call distribution across the five fixed categories, counts 10..=50.
pub fn call_categories(rng: &mut impl Rng) -> Vec<CategoryCount> {
    CALL_CATEGORIES
        .into_iter()
        .map(|category| CategoryCount { category, count: rng.random_range(10..=50) })
        .collect()
}

/// Top-`count` agent leaderboard, performance 80..=100.
pub fn agent_performance(rng: &mut impl Rng, count: u32) -> Vec<AgentRecord> {
    (1..=count)
        .map(|n| AgentRecord { id: format!("Agent-{n:03}"), performance: rng.random_range(80..=100) })
        .collect()
}

/// Daily report rows for the most recent `days` days (oldest first).
///
/// Bounds: calls 800..1500, response 0.2..=0.8s, satisfaction 85..=98%.
pub fn daily_reports(rng: &mut impl Rng, days: u32) -> Vec<ReportRow> {
    (0..days)
        .rev()
        .map(|back| ReportRow {
            day: day_stamp(i64::from(back)),
            calls_handled: rng.random_range(800..1500),
            avg_response_secs: rng.random_range(0.2..=0.8),
            satisfaction_pct: rng.random_range(85.0..=98.0),
        })
        .collect()
}

/// `days` days of trend lines (oldest first): weekly call-volume cycle,
/// monthly response-time cycle, fortnightly satisfaction cycle, each with
/// bounded jitter sized to the original feed's spread.
pub fn trend_series(rng: &mut impl Rng, days: u32) -> Vec<TrendPoint> {
    (0..days)
        .map(|i| {
            let t = f64::from(i);
            TrendPoint {
                day: day_stamp(i64::from(days - 1 - i)),
                call_volume: 1000.0 + 200.0 * (t * TAU / 7.0).sin() + noise(rng, 50.0),
                response_secs: 0.5 + 0.2 * (t * TAU / 30.0).sin() + noise(rng, 0.05),
                satisfaction_pct: 90.0 + 5.0 * (t * TAU / 14.0).sin() + noise(rng, 2.0),
            }
        })
        .collect()
}

/// The four registered models with fresh accuracy draws (92..=96.5%).
pub fn model_registry(rng: &mut impl Rng) -> Vec<ModelRecord> {
    let catalog: [(&'static str, &'static str, ModelStatus); 4] = [
        ("GPT-Neo-Customer", "v2.1", ModelStatus::Active),
        ("BERT-Support", "v1.8", ModelStatus::Standby),
        ("T5-Sales", "v3.0", ModelStatus::Active),
        ("Custom-Neural", "v4.2", ModelStatus::Training),
    ];
    catalog
        .into_iter()
        .map(|(name, version, status)| ModelRecord {
            name,
            version,
            accuracy_pct: rng.random_range(92.0..=96.5),
            status,
            last_updated: day_stamp(rng.random_range(1..=20)),
        })
        .collect()
}

/// Host metrics for the status terminals.
///
/// Bounds: cpu 20..=60%, ram 50..=80%, latency 8..=30ms, queue 0..=40,
/// agents 240..=255, model accuracy 93..=96%.
pub fn system_status(rng: &mut impl Rng) -> SystemStatus {
    SystemStatus {
        cpu_pct: rng.random_range(20..=60),
        ram_pct: rng.random_range(50..=80),
        latency_ms: rng.random_range(8..=30),
        queued_calls: rng.random_range(0..=40),
        active_agents: rng.random_range(240..=255),
        model_accuracy_pct: rng.random_range(93.0..=96.0),
    }
}

/// Monitoring terminal figures.
///
/// Bounds: gpu 60..=90%, memory 10..=16 of 32GB, cache hit 90..=98%,
/// latency 15..=35ms, throughput 1500..=2500 req/s.
pub fn neural_monitor(rng: &mut impl Rng) -> NeuralMonitor {
    NeuralMonitor {
        networks_online: 5,
        networks_total: 5,
        gpu_pct: rng.random_range(60..=90),
        memory_gb: rng.random_range(10.0..=16.0),
        memory_total_gb: 32,
        cache_hit_pct: rng.random_range(90.0..=98.0),
        latency_ms: rng.random_range(15..=35),
        throughput_rps: rng.random_range(1500..=2500),
    }
}

/// Deployed-model gauge cluster for the training tab.
///
/// Bounds: accuracy 93.5..=95.5% (delta 0.5..=2.5), loss 0.02..=0.03
/// (delta -0.005..=-0.003), f1 0.91..=0.93 (delta 0.01..=0.02).
pub fn model_gauges(rng: &mut impl Rng) -> ModelGauges {
    ModelGauges {
        accuracy_pct: rng.random_range(93.5..=95.5),
        accuracy_delta_pct: rng.random_range(0.5..=2.5),
        loss: rng.random_range(0.02..=0.03),
        loss_delta: rng.random_range(-0.005..=-0.003),
        f1: rng.random_range(0.91..=0.93),
        f1_delta: rng.random_range(0.01..=0.02),
    }
}

/// Sidebar status-box metrics.
///
/// Bounds: calls 1000..=1400, agents 150..=250, load 50..=80%,
/// response 0.2..=0.6s.
pub fn sidebar_metrics(rng: &mut impl Rng) -> SidebarMetrics {
    SidebarMetrics {
        calls: rng.random_range(1000..=1400),
        calls_delta: rng.random_range(-50..=150),
        agents: rng.random_range(150..=250),
        load_pct: rng.random_range(50..=80),
        load_delta: rng.random_range(-8..=8),
        response_secs: rng.random_range(0.2..=0.6),
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// ISO day stamp `days_back` days before today (UTC).
fn day_stamp(days_back: i64) -> String {
    let day = time::OffsetDateTime::now_utc().date() - time::Duration::days(days_back);
    format!("{:04}-{:02}-{:02}", day.year(), u8::from(day.month()), day.day())
}

/// Bounded jitter with spread `sigma`, stand-in for the gaussian noise of
/// the feed this simulates. Spans roughly two standard deviations.
fn noise(rng: &mut impl Rng, sigma: f64) -> f64 {
    rng.random_range(-2.0 * sigma..=2.0 * sigma)
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
