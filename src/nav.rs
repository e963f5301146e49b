//! Page and sub-tab navigation state machine.
//!
//! DESIGN
//! ======
//! Pages and sub-tabs are closed enums, so every navigation target is
//! checked at compile time and the render pass can match exhaustively.
//! Unknown names never reach this module: serde rejects them at the route
//! boundary with a 400.
//!
//! Each page remembers its own sub-tab independently, so switching from
//! Call Analytics to Neural Control and back restores the analytics tab
//! the operator last had open.

use serde::{Deserialize, Serialize};

// =============================================================================
// PAGES
// =============================================================================

/// Top-level dashboard page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Home / landing page.
    CommandCenter,
    /// Call volume, performance, and trend charts.
    CallAnalytics,
    /// Agent configuration and training controls.
    NeuralControl,
}

impl Default for Page {
    fn default() -> Self {
        Self::CommandCenter
    }
}

impl Page {
    /// Stable name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CommandCenter => "command_center",
            Self::CallAnalytics => "call_analytics",
            Self::NeuralControl => "neural_control",
        }
    }
}

// =============================================================================
// SUB-TABS
// =============================================================================

/// Command Center sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeTab {
    #[default]
    Overview,
    Services,
    Stats,
    Status,
}

/// Call Analytics sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsTab {
    #[default]
    Dashboard,
    Realtime,
    Reports,
    Trends,
}

/// Neural Control sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeuralTab {
    #[default]
    Config,
    Training,
    Monitoring,
    Models,
}

/// A sub-tab selection, tagged with the page it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", content = "tab", rename_all = "snake_case")]
pub enum Tab {
    CommandCenter(HomeTab),
    CallAnalytics(AnalyticsTab),
    NeuralControl(NeuralTab),
}

impl Tab {
    /// The page this tab lives on.
    #[must_use]
    pub fn page(self) -> Page {
        match self {
            Self::CommandCenter(_) => Page::CommandCenter,
            Self::CallAnalytics(_) => Page::CallAnalytics,
            Self::NeuralControl(_) => Page::NeuralControl,
        }
    }
}

// =============================================================================
// NAV STATE
// =============================================================================

/// Current page plus the remembered sub-tab of every page.
///
/// Exactly one page is current at a time; `current_tab` resolves the active
/// sub-tab from the current page's slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub page: Page,
    pub home_tab: HomeTab,
    pub analytics_tab: AnalyticsTab,
    pub neural_tab: NeuralTab,
}

impl NavState {
    /// Switch to the given page. Total over all pages; no-op transitions
    /// (navigating to the current page) are legal.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    /// Select a sub-tab. The selection is stored in the owning page's slot,
    /// so selecting a tab for a non-current page is remembered without
    /// changing the current page.
    pub fn select_tab(&mut self, tab: Tab) {
        match tab {
            Tab::CommandCenter(t) => self.home_tab = t,
            Tab::CallAnalytics(t) => self.analytics_tab = t,
            Tab::NeuralControl(t) => self.neural_tab = t,
        }
    }

    /// The sub-tab of the current page.
    #[must_use]
    pub fn current_tab(&self) -> Tab {
        match self.page {
            Page::CommandCenter => Tab::CommandCenter(self.home_tab),
            Page::CallAnalytics => Tab::CallAnalytics(self.analytics_tab),
            Page::NeuralControl => Tab::NeuralControl(self.neural_tab),
        }
    }
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;
