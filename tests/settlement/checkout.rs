use super::*;
use mockito::Matcher;
use skyline_portal::{error::api::ApiError, settlement::CHECKOUT_FAILED_MESSAGE};

#[tokio::test]
// Test that checkout posts a form drawing on the balance and returns the payment page
async fn checkout_returns_redirect_url() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_order_detail_endpoint(TEST_TRADE_NO, 0, Some(500), 1)
        .with_payment_methods_endpoint(vec![factory::mock_payment_method(2, "Stripe")], 1)
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/user/order/checkout")
                .match_header("content-type", "application/x-www-form-urlencoded")
                .match_body(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("trade_no".into(), TEST_TRADE_NO.into()),
                    Matcher::UrlEncoded("method".into(), "2".into()),
                    Matcher::UrlEncoded("use_balance".into(), "1".into()),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(factory::mock_checkout_redirect().to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let portal = test.signed_in_portal();

    let mut tracker = portal.track_order(TEST_TRADE_NO).await.unwrap();
    let method = tracker.payment_methods()[0].id;
    let url = tracker.checkout(method).await;
    tracker.close();

    assert_eq!(url, Ok(TEST_PAYMENT_URL.to_string()));
    assert_eq!(tracker.detail().original_price(), 2000);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that a checkout response without a redirect reports the backend message
async fn checkout_without_redirect_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_order_detail_endpoint(TEST_TRADE_NO, 0, None, 1)
        .with_payment_methods_endpoint(vec![factory::mock_payment_method(2, "Stripe")], 1)
        .with_checkout_endpoint(
            serde_json::json!({ "type": 0, "data": null, "message": "Gateway disabled" }),
            1,
        )
        .build()
        .await?;
    let portal = test.signed_in_portal();

    let mut tracker = portal.track_order(TEST_TRADE_NO).await.unwrap();
    let result = tracker.checkout(2).await;
    tracker.close();

    assert_eq!(result, Err(ApiError::Rejected("Gateway disabled".to_string())));
    assert_eq!(notification_messages(&portal), vec!["Gateway disabled"]);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that an empty redirect falls back to the generic failure text
async fn checkout_with_empty_redirect_uses_fallback() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_order_detail_endpoint(TEST_TRADE_NO, 0, None, 1)
        .with_payment_methods_endpoint(Vec::new(), 1)
        .with_checkout_endpoint(serde_json::json!({ "type": 1, "data": "" }), 1)
        .build()
        .await?;
    let portal = test.signed_in_portal();

    let mut tracker = portal.track_order(TEST_TRADE_NO).await.unwrap();
    let result = tracker.checkout(1).await;
    tracker.close();

    assert!(matches!(result, Err(ApiError::Rejected(_))));
    assert_eq!(notification_messages(&portal), vec![CHECKOUT_FAILED_MESSAGE]);

    Ok(())
}
