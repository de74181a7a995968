use super::*;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
// Test that commission logs request the given page and decode the paginated listing
async fn commission_logs_request_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/user/invite/details")
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("current".into(), "2".into()),
                    Matcher::UrlEncoded("page_size".into(), "10".into()),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(
                    json!({
                        "data": [{
                            "trade_no": TEST_TRADE_NO,
                            "order_amount": 1500,
                            "commission_amount": 150,
                            "commission_status": 1,
                            "created_at": 1_700_000_000
                        }],
                        "total": 11
                    })
                    .to_string(),
                )
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let portal = test.signed_in_portal();

    let page = portal.client().commission_logs(2, 10).await.unwrap();

    assert_eq!(page.total, 11);
    assert_eq!(page.data.len(), 1);
    assert!(page.data[0].is_paid());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that a commission transfer posts the amount in cents
async fn transfer_commission_posts_amount() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/user/transfer")
                .match_body(Matcher::Json(json!({ "transfer_amount": 2500 })))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"data":true}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let portal = test.signed_in_portal();

    let result = portal.client().transfer_commission(2500).await;

    assert_eq!(result, Ok(()));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that invite codes and their counters are decoded
async fn invites_are_decoded() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.create_data_endpoint(
        "GET",
        "/user/invite/fetch",
        json!({
            "codes": [{
                "id": 1,
                "code": "AbCd1234",
                "user_id": 7,
                "created_at": 1_700_000_000,
                "updated_at": "1700000000"
            }],
            "stat": [3, 200, 10, 450, 250]
        }),
        1,
    );
    let portal = test.signed_in_portal();

    let invites = portal.client().invites().await.unwrap();

    assert_eq!(invites.codes[0].code, "AbCd1234");
    assert_eq!(invites.codes[0].invite_count, None);
    assert_eq!(invites.stat, [3, 200, 10, 450, 250]);
    mock.assert();

    Ok(())
}

#[tokio::test]
// Test that the guest configuration is readable without a session
async fn guest_config_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/guest/comm/config")
                .match_query(Matcher::Any)
                .match_header("authorization", Matcher::Missing)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"data":{"tos_url":"https://example.com/tos"}}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let portal = test.portal();

    let config = portal.client().guest_config().await.unwrap();

    assert_eq!(config.tos_url.as_deref(), Some("https://example.com/tos"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that the ticket form configuration is passed through unchanged
async fn ticket_config_is_passed_through() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.create_data_endpoint(
        "GET",
        "/user/comm/config",
        json!({ "ticket_status": 0, "currency": "CNY" }),
        1,
    );
    let portal = test.signed_in_portal();

    let config = portal.client().ticket_config().await.unwrap();

    assert_eq!(config["currency"], "CNY");
    mock.assert();

    Ok(())
}
