use super::*;

// =============================================================================
// defaults
// =============================================================================

#[test]
fn default_page_is_command_center() {
    let nav = NavState::default();
    assert_eq!(nav.page, Page::CommandCenter);
}

#[test]
fn default_tabs_are_first_declared() {
    let nav = NavState::default();
    assert_eq!(nav.home_tab, HomeTab::Overview);
    assert_eq!(nav.analytics_tab, AnalyticsTab::Dashboard);
    assert_eq!(nav.neural_tab, NeuralTab::Config);
}

// =============================================================================
// navigate
// =============================================================================

#[test]
fn navigate_sets_current_page_for_every_page() {
    for page in [Page::CommandCenter, Page::CallAnalytics, Page::NeuralControl] {
        let mut nav = NavState::default();
        nav.navigate(page);
        assert_eq!(nav.page, page);
    }
}

#[test]
fn navigate_to_current_page_is_a_no_op() {
    let mut nav = NavState::default();
    nav.navigate(Page::CommandCenter);
    assert_eq!(nav, NavState::default());
}

#[test]
fn navigate_preserves_tab_selections() {
    let mut nav = NavState::default();
    nav.select_tab(Tab::CallAnalytics(AnalyticsTab::Trends));
    nav.navigate(Page::NeuralControl);
    nav.navigate(Page::CallAnalytics);
    assert_eq!(nav.current_tab(), Tab::CallAnalytics(AnalyticsTab::Trends));
}

// =============================================================================
// select_tab
// =============================================================================

#[test]
fn select_tab_on_current_page_changes_current_tab() {
    let mut nav = NavState::default();
    nav.select_tab(Tab::CommandCenter(HomeTab::Status));
    assert_eq!(nav.current_tab(), Tab::CommandCenter(HomeTab::Status));
}

#[test]
fn select_tab_for_other_page_does_not_switch_page() {
    let mut nav = NavState::default();
    nav.select_tab(Tab::NeuralControl(NeuralTab::Models));
    assert_eq!(nav.page, Page::CommandCenter);
    nav.navigate(Page::NeuralControl);
    assert_eq!(nav.current_tab(), Tab::NeuralControl(NeuralTab::Models));
}

#[test]
fn current_tab_matches_current_page() {
    let mut nav = NavState::default();
    nav.navigate(Page::CallAnalytics);
    assert_eq!(nav.current_tab().page(), Page::CallAnalytics);
}

// =============================================================================
// serde boundary
// =============================================================================

#[test]
fn page_deserializes_from_snake_case() {
    let page: Page = serde_json::from_str(r#""neural_control""#).unwrap();
    assert_eq!(page, Page::NeuralControl);
}

#[test]
fn unknown_page_name_is_rejected() {
    let result = serde_json::from_str::<Page>(r#""mainframe""#);
    assert!(result.is_err());
}

#[test]
fn tab_deserializes_with_page_tag() {
    let tab: Tab = serde_json::from_str(r#"{"page":"call_analytics","tab":"realtime"}"#).unwrap();
    assert_eq!(tab, Tab::CallAnalytics(AnalyticsTab::Realtime));
}

#[test]
fn tab_rejects_mismatched_page_and_tab() {
    let result = serde_json::from_str::<Tab>(r#"{"page":"call_analytics","tab":"models"}"#);
    assert!(result.is_err());
}

#[test]
fn tab_serde_round_trip() {
    let tab = Tab::CommandCenter(HomeTab::Services);
    let json = serde_json::to_string(&tab).unwrap();
    let restored: Tab = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, tab);
}
