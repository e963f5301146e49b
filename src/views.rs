//! Render pass: page and sidebar view models.
//!
//! DESIGN
//! ======
//! One synchronous pass per request: read the session's navigation state,
//! draw fresh synthetic data from the simulator, and emit a typed view
//! model for the rendering layer. `render` matches exhaustively over every
//! page/sub-tab pair, so adding a page or tab without a view is a compile
//! error. Nothing rendered here survives the request.

use rand::Rng;
use serde::Serialize;

use crate::nav::{AnalyticsTab, HomeTab, NavState, NeuralTab, Tab};
use crate::services::session::TrainingStatus;
use crate::sim::metrics::{
    self, AgentRecord, CategoryCount, CategoryScore, HourlyVolume, MetricSample, ModelGauges, ModelRecord,
    NeuralMonitor, ReportRow, SidebarMetrics, SystemStatus, TrendPoint,
};
use crate::state::AgentProfile;

/// Hourly buckets on the dashboard volume chart.
const VOLUME_HOURS: u32 = 24;
/// Agents on the realtime leaderboard.
const LEADERBOARD_AGENTS: u32 = 10;
/// Days in the report table.
const REPORT_DAYS: u32 = 30;
/// Days in the trend charts.
const TREND_DAYS: u32 = 90;

// =============================================================================
// BUILDING BLOCKS
// =============================================================================

/// Static showcase figure ("99.9% UPTIME").
#[derive(Clone, Debug, Serialize)]
pub struct StatCard {
    pub value: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

/// Static service-catalog entry.
#[derive(Clone, Debug, Serialize)]
pub struct ServiceCard {
    pub name: &'static str,
    pub blurb: &'static str,
    pub features: [&'static str; 4],
}

/// One terminal-style status panel: a list of `[TAG] message` lines.
#[derive(Clone, Debug, Serialize)]
pub struct TerminalPanel {
    pub lines: Vec<String>,
}

/// Legal ranges echoed alongside the profile so the form can render
/// its sliders.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ProfileLimits {
    pub hidden_layers: [u32; 2],
    pub neurons_per_layer: [u32; 2],
    pub learning_rates: [f64; 4],
    pub response_speed_ms: [u32; 2],
    pub context_window: [u32; 2],
    pub temperature: [f64; 2],
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self {
            hidden_layers: [5, 20],
            neurons_per_layer: [64, 512],
            learning_rates: crate::state::LEARNING_RATES,
            response_speed_ms: [50, 1000],
            context_window: [1000, 10_000],
            temperature: [0.1, 2.0],
        }
    }
}

// =============================================================================
// PAGE VIEWS
// =============================================================================

/// Chart- and table-ready payload for one page/sub-tab pair.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PageView {
    HomeOverview {
        status: &'static str,
        queue_status: &'static str,
        active_agents: u32,
        hero_stats: Vec<StatCard>,
    },
    HomeServices {
        services: Vec<ServiceCard>,
    },
    HomeStats {
        stats: Vec<StatCard>,
    },
    HomeStatus {
        terminals: Vec<TerminalPanel>,
    },
    AnalyticsDashboard {
        snapshot: MetricSample,
        hourly_volume: Vec<HourlyVolume>,
        performance: Vec<CategoryScore>,
    },
    AnalyticsRealtime {
        categories: Vec<CategoryCount>,
        agents: Vec<AgentRecord>,
    },
    AnalyticsReports {
        rows: Vec<ReportRow>,
    },
    AnalyticsTrends {
        points: Vec<TrendPoint>,
    },
    NeuralConfig {
        agent: AgentProfile,
        limits: ProfileLimits,
    },
    NeuralTraining {
        gauges: ModelGauges,
        training: Option<TrainingStatus>,
    },
    NeuralMonitoring {
        monitor: NeuralMonitor,
        terminals: Vec<TerminalPanel>,
    },
    NeuralModels {
        models: Vec<ModelRecord>,
    },
}

/// Sidebar payload: live metrics, the decorative operator profile, and
/// network diagnostics.
#[derive(Clone, Debug, Serialize)]
pub struct SidebarView {
    pub metrics: SidebarMetrics,
    pub operator: OperatorProfile,
    pub diagnostics: Diagnostics,
}

/// Decorative operator identity. Not an authentication surface.
#[derive(Clone, Debug, Serialize)]
pub struct OperatorProfile {
    pub id: &'static str,
    pub status: &'static str,
    pub level: &'static str,
    pub sessions: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct Diagnostics {
    pub primary_server: &'static str,
    pub backup_systems: &'static str,
    pub latency_ms: u32,
    pub bandwidth_pct: u32,
    pub models_active: &'static str,
}

// =============================================================================
// RENDER
// =============================================================================

/// Build the view for the session's current page and sub-tab.
pub fn render(rng: &mut impl Rng, nav: &NavState, agent: &AgentProfile, training: Option<TrainingStatus>) -> PageView {
    match nav.current_tab() {
        Tab::CommandCenter(HomeTab::Overview) => PageView::HomeOverview {
            status: "ONLINE",
            queue_status: "OPTIMAL",
            active_agents: metrics::system_status(rng).active_agents,
            hero_stats: stat_cards(),
        },
        Tab::CommandCenter(HomeTab::Services) => PageView::HomeServices { services: service_cards() },
        Tab::CommandCenter(HomeTab::Stats) => PageView::HomeStats { stats: stat_cards() },
        Tab::CommandCenter(HomeTab::Status) => {
            let status = metrics::system_status(rng);
            PageView::HomeStatus { terminals: status_terminals(&status) }
        }
        Tab::CallAnalytics(AnalyticsTab::Dashboard) => PageView::AnalyticsDashboard {
            snapshot: metrics::dashboard_snapshot(rng),
            hourly_volume: metrics::hourly_call_volume(rng, VOLUME_HOURS),
            performance: metrics::performance_overview(rng),
        },
        Tab::CallAnalytics(AnalyticsTab::Realtime) => PageView::AnalyticsRealtime {
            categories: metrics::call_categories(rng),
            agents: metrics::agent_performance(rng, LEADERBOARD_AGENTS),
        },
        Tab::CallAnalytics(AnalyticsTab::Reports) => {
            PageView::AnalyticsReports { rows: metrics::daily_reports(rng, REPORT_DAYS) }
        }
        Tab::CallAnalytics(AnalyticsTab::Trends) => {
            PageView::AnalyticsTrends { points: metrics::trend_series(rng, TREND_DAYS) }
        }
        Tab::NeuralControl(NeuralTab::Config) => {
            PageView::NeuralConfig { agent: *agent, limits: ProfileLimits::default() }
        }
        Tab::NeuralControl(NeuralTab::Training) => {
            PageView::NeuralTraining { gauges: metrics::model_gauges(rng), training }
        }
        Tab::NeuralControl(NeuralTab::Monitoring) => {
            let monitor = metrics::neural_monitor(rng);
            let terminals = monitor_terminals(&monitor);
            PageView::NeuralMonitoring { monitor, terminals }
        }
        Tab::NeuralControl(NeuralTab::Models) => PageView::NeuralModels { models: metrics::model_registry(rng) },
    }
}

/// Build the sidebar view.
pub fn render_sidebar(rng: &mut impl Rng) -> SidebarView {
    let status = metrics::system_status(rng);
    SidebarView {
        metrics: metrics::sidebar_metrics(rng),
        operator: OperatorProfile { id: "ADMIN-7734", status: "ACTIVE", level: "MAXIMUM", sessions: 1247 },
        diagnostics: Diagnostics {
            primary_server: "ONLINE",
            backup_systems: "READY",
            latency_ms: status.latency_ms,
            bandwidth_pct: rng.random_range(90..=99),
            models_active: "5/5",
        },
    }
}

// =============================================================================
// STATIC CONTENT
// =============================================================================

fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard { value: "99.9%", label: "UPTIME", detail: "System Reliability" },
        StatCard { value: "50K+", label: "CALLS/DAY", detail: "Daily Processing" },
        StatCard { value: "0.3s", label: "RESPONSE", detail: "Average Time" },
        StatCard { value: "95%", label: "SATISFACTION", detail: "Customer Rating" },
    ]
}

fn service_cards() -> Vec<ServiceCard> {
    vec![
        ServiceCard {
            name: "AI VOICE AGENTS",
            blurb: "Neural network voice processing with real-time sentiment analysis",
            features: [
                "Natural Language Processing",
                "Multi-language Support",
                "Emotion Recognition",
                "24/7 Availability",
            ],
        },
        ServiceCard {
            name: "DATA ANALYTICS",
            blurb: "Real-time call analytics and performance monitoring",
            features: [
                "Call Quality Analysis",
                "Performance Metrics",
                "Predictive Analytics",
                "Custom Reporting",
            ],
        },
        ServiceCard {
            name: "NEURAL TRAINING",
            blurb: "Continuous model training and optimization",
            features: [
                "Machine Learning Models",
                "Adaptive Responses",
                "Performance Optimization",
                "Custom Training Data",
            ],
        },
    ]
}

fn status_terminals(status: &SystemStatus) -> Vec<TerminalPanel> {
    vec![
        TerminalPanel {
            lines: vec![
                "[SYSTEM] AI Call Center online".into(),
                "[STATUS] All systems operational".into(),
                "[READY] Standing by for connections".into(),
                "[AI] Neural networks active".into(),
            ],
        },
        TerminalPanel {
            lines: vec![
                format!("[LOAD] CPU: {}% | RAM: {}%", status.cpu_pct, status.ram_pct),
                format!("[NETWORK] Latency: {}ms", status.latency_ms),
                format!("[AGENTS] {} active, 0 offline", status.active_agents),
                format!("[QUEUE] {} calls waiting", status.queued_calls),
            ],
        },
        TerminalPanel {
            lines: vec![
                format!("[ML] Model accuracy: {:.1}%", status.model_accuracy_pct),
                "[SECURITY] All shields up".into(),
                "[BACKUP] Systems synced".into(),
                "[UPDATE] Ready for deployment".into(),
            ],
        },
    ]
}

fn monitor_terminals(monitor: &NeuralMonitor) -> Vec<TerminalPanel> {
    vec![
        TerminalPanel {
            lines: vec![
                format!("[NEURAL] Networks online: {}/{}", monitor.networks_online, monitor.networks_total),
                "[STATUS] Training active".into(),
                format!("[LOAD] GPU utilization: {}%", monitor.gpu_pct),
            ],
        },
        TerminalPanel {
            lines: vec![
                "[MODEL] Primary: ACTIVE".into(),
                "[BACKUP] Secondary: STANDBY".into(),
                "[SYNC] Models synchronized".into(),
            ],
        },
        TerminalPanel {
            lines: vec![
                format!("[MEMORY] Usage: {:.1}GB/{}GB", monitor.memory_gb, monitor.memory_total_gb),
                format!("[CACHE] Hit rate: {:.1}%", monitor.cache_hit_pct),
                format!("[LATENCY] Avg: {}ms", monitor.latency_ms),
                format!("[THROUGHPUT] {} req/sec", monitor.throughput_rps),
            ],
        },
    ]
}

#[cfg(test)]
#[path = "views_test.rs"]
mod tests;
