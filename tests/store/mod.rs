//! Tests for the aggregated user-state store against the mock backend.

use portal_test_utils::prelude::*;
use skyline_portal::client::SERVER_ERROR_MESSAGE;

use crate::util::{notification_messages, TestSetupExt};

#[tokio::test]
// Test that live usage overrides the profile's usage fields
async fn composes_profile_usage_and_plans() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_info_endpoint(Some(2), 1)
        .with_plans_endpoint(vec![1, 2], 1)
        .with_subscription_endpoint(5_000, 6_000, "https://sub.example.com/live-token", 1)
        .build()
        .await?;
    let portal = test.signed_in_portal();

    let state = portal.user().settled().await;

    assert!(state.error.is_none());
    assert!(!state.loading);
    let view = state.aggregated_view().unwrap();
    assert_eq!(view.user.u, 5_000);
    assert_eq!(view.user.d, 6_000);
    assert_eq!(
        view.user.subscribe_url.as_deref(),
        Some("https://sub.example.com/live-token")
    );
    assert_eq!(view.current_plan.map(|plan| plan.name), Some("Plan 2".to_string()));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that a failed usage read degrades to the profile's own values
async fn usage_failure_degrades() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_info_endpoint(Some(1), 1)
        .with_plans_endpoint(vec![1], 1)
        .with_error_endpoint("GET", "/user/getSubscribe", 500, 1)
        .build()
        .await?;
    let portal = test.signed_in_portal();

    let state = portal.user().settled().await;

    assert!(state.error.is_none());
    assert!(!state.loading);
    let view = state.aggregated_view().unwrap();
    assert_eq!(view.user.u, 1_048_576);
    assert_eq!(
        view.user.subscribe_url.as_deref(),
        Some("https://sub.example.com/profile-token")
    );
    assert_eq!(notification_messages(&portal), vec![SERVER_ERROR_MESSAGE]);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that a failed profile read leaves no aggregated view
async fn profile_failure_is_fatal() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "/user/info", 500, 1)
        .with_plans_endpoint(vec![1], 1)
        .with_subscription_endpoint(5_000, 6_000, "https://sub.example.com/live-token", 1)
        .build()
        .await?;
    let portal = test.signed_in_portal();

    let state = portal.user().settled().await;

    assert!(state.error.is_some());
    assert!(!state.loading);
    assert!(state.aggregated_view().is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that a repeated refresh re-reads the profile but reuses the cached plan catalog
async fn refresh_rereads_profile_but_not_plans() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_info_endpoint(Some(1), 2)
        .with_plans_endpoint(vec![1], 1)
        .with_subscription_endpoint(5_000, 6_000, "https://sub.example.com/live-token", 2)
        .build()
        .await?;
    let portal = test.signed_in_portal();

    portal.user().settled().await;
    let state = portal.user().refresh_and_wait().await;

    assert!(state.aggregated_view().is_some());
    test.assert_mocks();

    Ok(())
}
