use super::*;

use crate::nav::Page;
use crate::services::session as sessions;
use crate::state::AgentPatch;
use crate::state::test_helpers::{seed_session, test_app_state};
use crate::views::PageView;

#[tokio::test]
async fn fresh_session_renders_home_overview() {
    let state = test_app_state();
    let session_id = seed_session(&state).await;

    let Json(view) = page(State(state), Path(session_id)).await.unwrap();
    assert!(matches!(view, PageView::HomeOverview { .. }));
}

#[tokio::test]
async fn page_follows_navigation() {
    let state = test_app_state();
    let session_id = seed_session(&state).await;
    sessions::navigate(&state, session_id, Page::CallAnalytics)
        .await
        .unwrap();

    let Json(view) = page(State(state), Path(session_id)).await.unwrap();
    assert!(matches!(view, PageView::AnalyticsDashboard { .. }));
}

#[tokio::test]
async fn page_on_unknown_session_is_404() {
    let state = test_app_state();
    let err = page(State(state), Path(Uuid::new_v4())).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sidebar_renders_for_live_session_only() {
    let state = test_app_state();
    let session_id = seed_session(&state).await;

    let Json(view) = sidebar(State(state.clone()), Path(session_id)).await.unwrap();
    assert_eq!(view.operator.id, "ADMIN-7734");

    let err = sidebar(State(state), Path(Uuid::new_v4())).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn network_map_is_sized_by_the_session_profile() {
    let state = test_app_state();
    let session_id = seed_session(&state).await;
    let patch = AgentPatch { hidden_layers: Some(7), ..AgentPatch::default() };
    sessions::update_agent(&state, session_id, patch).await.unwrap();

    let Json(map) = network(State(state), Path(session_id)).await.unwrap();
    // 7 hidden layers plus input and output rows.
    assert_eq!(map.stats.total_layers, 9);
}
