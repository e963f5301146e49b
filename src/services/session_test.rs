use super::*;

use crate::nav::{AnalyticsTab, HomeTab, NeuralTab};
use crate::sim::training::TrainingSpec;
use crate::state::test_helpers::test_app_state;

// =============================================================================
// create / snapshot / remove
// =============================================================================

#[tokio::test]
async fn create_returns_registered_session_at_defaults() {
    let state = test_app_state();
    let session_id = create(&state).await;

    let snap = snapshot(&state, session_id).await.unwrap();
    assert_eq!(snap.nav, NavState::default());
    assert_eq!(snap.agent, AgentProfile::default());
    assert!(snap.training.is_none());
}

#[tokio::test]
async fn snapshot_unknown_session_fails() {
    let state = test_app_state();
    let result = snapshot(&state, Uuid::new_v4()).await;
    assert!(matches!(result, Err(SessionError::NotFound(_))));
}

#[tokio::test]
async fn remove_ends_session() {
    let state = test_app_state();
    let session_id = create(&state).await;
    remove(&state, session_id).await.unwrap();
    assert!(matches!(snapshot(&state, session_id).await, Err(SessionError::NotFound(_))));
}

#[tokio::test]
async fn remove_unknown_session_fails() {
    let state = test_app_state();
    let result = remove(&state, Uuid::new_v4()).await;
    assert!(matches!(result, Err(SessionError::NotFound(_))));
}

#[tokio::test]
async fn sessions_are_independent() {
    let state = test_app_state();
    let first = create(&state).await;
    let second = create(&state).await;

    navigate(&state, first, Page::NeuralControl).await.unwrap();
    let untouched = snapshot(&state, second).await.unwrap();
    assert_eq!(untouched.nav.page, Page::CommandCenter);
}

// =============================================================================
// navigate / select_tab
// =============================================================================

#[tokio::test]
async fn navigate_updates_current_page() {
    let state = test_app_state();
    let session_id = create(&state).await;

    for page in [Page::CallAnalytics, Page::NeuralControl, Page::CommandCenter] {
        let nav = navigate(&state, session_id, page).await.unwrap();
        assert_eq!(nav.page, page);
    }
}

#[tokio::test]
async fn select_tab_is_remembered_per_page() {
    let state = test_app_state();
    let session_id = create(&state).await;

    select_tab(&state, session_id, Tab::CommandCenter(HomeTab::Stats)).await.unwrap();
    select_tab(&state, session_id, Tab::CallAnalytics(AnalyticsTab::Reports)).await.unwrap();
    let nav = select_tab(&state, session_id, Tab::NeuralControl(NeuralTab::Models)).await.unwrap();

    assert_eq!(nav.home_tab, HomeTab::Stats);
    assert_eq!(nav.analytics_tab, AnalyticsTab::Reports);
    assert_eq!(nav.neural_tab, NeuralTab::Models);
    assert_eq!(nav.page, Page::CommandCenter);
}

#[tokio::test]
async fn navigate_unknown_session_fails() {
    let state = test_app_state();
    let result = navigate(&state, Uuid::new_v4(), Page::CallAnalytics).await;
    assert!(matches!(result, Err(SessionError::NotFound(_))));
}

// =============================================================================
// update_agent
// =============================================================================

#[tokio::test]
async fn update_agent_clamps_and_persists() {
    let state = test_app_state();
    let session_id = create(&state).await;

    let profile = update_agent(
        &state,
        session_id,
        AgentPatch { hidden_layers: Some(50), temperature: Some(0.01), ..AgentPatch::default() },
    )
    .await
    .unwrap();
    assert_eq!(profile.hidden_layers, 20);
    assert!((profile.temperature - 0.1).abs() < f64::EPSILON);

    let snap = snapshot(&state, session_id).await.unwrap();
    assert_eq!(snap.agent, profile);
}

// =============================================================================
// training status in snapshot
// =============================================================================

#[tokio::test]
async fn snapshot_reports_training_run() {
    let state = test_app_state();
    let session_id = create(&state).await;

    let spec = TrainingSpec { epochs: 3, batch_size: 32, ..TrainingSpec::default() };
    crate::services::training::start(&state, session_id, spec).await.unwrap();

    let snap = snapshot(&state, session_id).await.unwrap();
    let status = snap.training.expect("training status present");
    assert_eq!(status.planned_epochs, 3);
    assert_eq!(status.batch_size, 32);
}
