use super::*;
use skyline_portal::settlement::{ORDER_CANCELLED_MESSAGE, PAYMENT_METHODS_ERROR_MESSAGE};

#[tokio::test]
// Test that a pending order is polled until it is paid and never again afterwards
async fn pending_order_polls_until_paid() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_payment_methods_endpoint(vec![factory::mock_payment_method(1, "Alipay")], 1)
        .build()
        .await?;
    // Created in order: the first matches until exhausted, then the second takes over
    let pending = test.create_order_detail_endpoint(
        factory::mock_order_detail(TEST_TRADE_NO, 0, None),
        1,
    );
    let paid = test.create_order_detail_endpoint(
        factory::mock_order_detail(TEST_TRADE_NO, 1, None),
        1,
    );
    let portal = test.signed_in_portal();

    let tracker = portal.track_order(TEST_TRADE_NO).await.unwrap();
    assert_eq!(tracker.status(), OrderStatus::Pending);
    assert_eq!(tracker.payment_methods().len(), 1);

    let poller = tracker.poller().unwrap();
    assert_eq!(poller.outcome().await, PollOutcome::Settled(OrderStatus::Paid));
    assert_eq!(tracker.status(), OrderStatus::Paid);

    // Several intervals pass without another read
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
    pending.assert();
    paid.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that an already settled order is loaded without polling or payment methods
async fn settled_order_is_not_polled() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_order_detail_endpoint(TEST_TRADE_NO, 3, None, 1)
        .with_payment_methods_endpoint(Vec::new(), 0)
        .build()
        .await?;
    let portal = test.signed_in_portal();

    let tracker = portal.track_order(TEST_TRADE_NO).await.unwrap();

    assert_eq!(tracker.status(), OrderStatus::Completed);
    assert!(tracker.poller().is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test that failing to load payment methods is reported but does not stop tracking
async fn payment_methods_failure_is_reported() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_order_detail_endpoint(TEST_TRADE_NO, 0, None, 1)
        .with_error_endpoint("GET", "/user/order/getPaymentMethod", 404, 1)
        .build()
        .await?;
    let portal = test.signed_in_portal();

    let mut tracker = portal.track_order(TEST_TRADE_NO).await.unwrap();

    assert!(tracker.payment_methods().is_empty());
    assert!(tracker.poller().is_some());
    assert_eq!(
        notification_messages(&portal),
        vec![PAYMENT_METHODS_ERROR_MESSAGE]
    );

    tracker.close();

    Ok(())
}

#[tokio::test]
// Test that a failed poll stops tracking for good
async fn failed_poll_stops_tracking() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_payment_methods_endpoint(Vec::new(), 1)
        .build()
        .await?;
    let pending = test.create_order_detail_endpoint(
        factory::mock_order_detail(TEST_TRADE_NO, 0, None),
        1,
    );
    let failure =
        test.create_error_endpoint("GET", "/user/order/detail", 503, None, 1);
    let portal = test.signed_in_portal();

    let tracker = portal.track_order(TEST_TRADE_NO).await.unwrap();
    let outcome = tracker.poller().unwrap().outcome().await;

    assert!(matches!(outcome, PollOutcome::Failed(_)));
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
    pending.assert();
    failure.assert();
    assert_eq!(tracker.status(), OrderStatus::Pending);

    Ok(())
}

#[tokio::test]
// Test that cancelling an order stops polling and confirms the cancellation
async fn cancel_stops_polling() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_order_detail_endpoint(TEST_TRADE_NO, 0, None, 1)
        .with_payment_methods_endpoint(Vec::new(), 1)
        .with_cancel_order_endpoint(1)
        .build()
        .await?;
    let portal = test.signed_in_portal();

    let mut tracker = portal.track_order(TEST_TRADE_NO).await.unwrap();
    tracker.cancel().await.unwrap();

    assert!(tracker.poller().is_none());
    assert_eq!(notification_messages(&portal), vec![ORDER_CANCELLED_MESSAGE]);

    // Teardown happened before the first interval elapsed, so the detail is read only once
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
    test.assert_mocks();

    Ok(())
}
