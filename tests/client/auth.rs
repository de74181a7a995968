use super::*;
use mockito::Matcher;
use skyline_portal::{error::api::ApiError, model::auth::LoginRequest};

fn login_request() -> LoginRequest {
    LoginRequest {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

#[tokio::test]
// Test that login returns the credential without starting the session itself
async fn login_returns_credential() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/passport/auth/login")
                .match_body(Matcher::Json(serde_json::json!({
                    "email": TEST_EMAIL,
                    "password": TEST_PASSWORD
                })))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"data":{"auth_data":"test-auth-token"}}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let portal = test.portal();

    let credential = portal.client().login(&login_request()).await;

    assert_eq!(credential, Ok(TEST_AUTH_TOKEN.to_string()));
    assert!(!portal.session().is_authenticated());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that a login response without a credential is rejected
async fn login_without_credential_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_login_endpoint("", 1).build().await?;
    let portal = test.portal();

    let result = portal.client().login(&login_request()).await;

    assert!(matches!(result, Err(ApiError::Rejected(_))));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that the current credential is attached verbatim as the authorization header
async fn attaches_credential_when_signed_in() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/user/info")
                .match_header("authorization", TEST_AUTH_TOKEN)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(
                    serde_json::json!({ "data": factory::mock_user_info(Some(1)) }).to_string(),
                )
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let portal = test.signed_in_portal();

    let user = portal.client().user_info().await;

    assert!(user.is_ok(), "{:?}", user);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that no authorization header is sent without a session
async fn omits_credential_when_signed_out() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/passport/comm/sendEmailVerify")
                .match_header("authorization", Matcher::Missing)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"data":true}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let portal = test.portal();

    let result = portal.client().send_email_verify(TEST_EMAIL).await;

    assert!(result.is_ok());
    test.assert_mocks();

    Ok(())
}
