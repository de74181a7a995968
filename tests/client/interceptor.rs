use super::*;
use skyline_portal::{
    client::{
        ApiClient, ClientConfig, CONNECTIVITY_MESSAGE, SERVER_ERROR_MESSAGE,
        SESSION_EXPIRED_MESSAGE,
    },
    error::{api::ApiError, failure::FailureKind},
    notification::NotificationQueue,
    session::{SessionManager, SessionStatus},
};

#[tokio::test]
// Test that a 401 ends the session, raises a notice and still returns the error
async fn unauthorized_forces_logout() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "/user/info", 401, 1)
        .build()
        .await?;
    let portal = test.signed_in_portal();
    let mut status = portal.session().subscribe();

    let result = portal.client().user_info().await;

    assert_eq!(
        result.map_err(|err| err.failure_kind()),
        Err(FailureKind::Authentication)
    );
    assert!(!portal.session().is_authenticated());
    assert!(status.has_changed().unwrap());
    assert_eq!(*status.borrow_and_update(), SessionStatus::SignedOut);
    assert_eq!(notification_messages(&portal), vec![SESSION_EXPIRED_MESSAGE]);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that a server failure raises the generic notice and leaves the session alone
async fn server_error_raises_notification() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock =
        test.create_error_endpoint("POST", "/user/changePassword", 502, Some("Bad gateway"), 1);
    let portal = test.signed_in_portal();

    let result = portal
        .client()
        .change_password(&skyline_portal::model::auth::ChangePasswordRequest {
            old_password: "old".to_string(),
            new_password: "new-password".to_string(),
            new_password_confirmation: "new-password".to_string(),
        })
        .await;

    // The caller still gets the backend message for its own inline error
    assert_eq!(
        result,
        Err(ApiError::Status {
            status: 502,
            message: Some("Bad gateway".to_string())
        })
    );
    assert!(portal.session().is_authenticated());
    assert_eq!(notification_messages(&portal), vec![SERVER_ERROR_MESSAGE]);
    mock.assert();

    Ok(())
}

#[tokio::test]
// Test that request-specific failures are left to the caller
async fn client_error_raises_no_notification() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.create_error_endpoint(
        "POST",
        "/user/coupon/check",
        422,
        Some("Coupon expired"),
        1,
    );
    let portal = test.signed_in_portal();

    let result = portal
        .client()
        .check_coupon(&skyline_portal::model::order::CouponCheckRequest {
            code: "SPRING".to_string(),
            plan_id: 1,
        })
        .await;

    assert_eq!(
        result.map_err(|err| err.user_message("Invalid coupon")),
        Err("Coupon expired".to_string())
    );
    assert!(portal.notifications().snapshot().is_empty());
    mock.assert();

    Ok(())
}

#[tokio::test]
// Test that an unreachable backend raises the connectivity notice
async fn unreachable_backend_raises_notification() {
    let notifications = NotificationQueue::default();
    let client = ApiClient::new(
        ClientConfig::new("http://127.0.0.1:1"),
        SessionManager::in_memory(),
        notifications.clone(),
    )
    .unwrap();

    let result = client.tickets().await;

    assert_eq!(
        result.map_err(|err| err.failure_kind()),
        Err(FailureKind::Connectivity)
    );
    let messages: Vec<String> = notifications
        .snapshot()
        .into_iter()
        .map(|notification| notification.message)
        .collect();
    assert_eq!(messages, vec![CONNECTIVITY_MESSAGE]);
}
