//! Tests for the wired client core.

use std::path::Path;

use portal_test_utils::prelude::*;
use skyline_portal::{
    cache::CacheConfig, notification::NotificationConfig, session::SessionConfig,
    settlement::PollerConfig, Config, Portal,
};

use crate::util::TestSetupExt;

fn config(test: &TestSetup, session_file: &Path) -> Config {
    Config {
        api_url: test.api_url(),
        session_file: session_file.to_path_buf(),
        knowledge_language: "en-US".to_string(),
        session: SessionConfig::default(),
        notifications: NotificationConfig::default(),
        cache: CacheConfig::default(),
        poller: PollerConfig::default(),
    }
}

fn persisted(path: &Path) -> serde_json::Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

#[tokio::test]
// Test that signing in persists the credential and loads the user state
async fn sign_in_starts_session_and_refreshes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(TEST_AUTH_TOKEN, 1)
        .with_user_info_endpoint(Some(1), 1)
        .with_plans_endpoint(vec![1], 1)
        .with_subscription_endpoint(1, 2, "https://sub.example.com/live-token", 1)
        .build()
        .await?;
    let session_file = test.session_file();
    let portal = Portal::from_config(&config(&test, &session_file)).unwrap();
    assert!(!portal.session().is_authenticated());

    portal.sign_in(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    assert!(portal.session().is_authenticated());
    assert_eq!(persisted(&session_file)["auth_token"], TEST_AUTH_TOKEN);

    let state = portal.user().settled().await;
    assert!(state.aggregated_view().is_some());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that a refused sign-in leaves the session signed out
async fn failed_sign_in_keeps_session_signed_out() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("POST", "/passport/auth/login", 400, 1)
        .build()
        .await?;
    let portal = test.portal();

    let result = portal.sign_in(TEST_EMAIL, "wrong-password").await;

    assert!(result.is_err());
    assert!(!portal.session().is_authenticated());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that a session idle for longer than five hours is discarded at startup
async fn stale_session_is_discarded_at_startup() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let session_file =
        test.write_session(TEST_AUTH_TOKEN, factory::epoch_millis_hours_ago(6))?;

    let portal = Portal::from_config(&config(&test, &session_file)).unwrap();

    assert!(!portal.session().is_authenticated());
    let stored = persisted(&session_file);
    assert!(stored.get("auth_token").is_none());
    assert!(stored.get("last_activity").is_none());

    Ok(())
}

#[tokio::test]
// Test that a session active within the idle window resumes and is re-stamped
async fn recent_session_resumes_at_startup() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let last_activity = factory::epoch_millis_hours_ago(1);
    let session_file = test.write_session(TEST_AUTH_TOKEN, last_activity)?;

    let portal = Portal::from_config(&config(&test, &session_file)).unwrap();

    assert!(portal.session().is_authenticated());
    let restamped: i64 = persisted(&session_file)["last_activity"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(restamped > last_activity);

    Ok(())
}

#[tokio::test]
// Test that signing out twice behaves like signing out once
async fn sign_out_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let portal = test.signed_in_portal();
    let mut status = portal.session().subscribe();

    portal.sign_out();
    let after_first = portal.session().snapshot();
    status.borrow_and_update();

    portal.sign_out();

    assert_eq!(portal.session().snapshot(), after_first);
    assert!(!status.has_changed().unwrap());

    Ok(())
}
