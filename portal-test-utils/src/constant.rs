//! Test constants shared by fixtures and integration tests.
//!
//! These are placeholder values, not real credentials.

/// Credential returned by the mock login endpoint.
pub static TEST_AUTH_TOKEN: &str = "test-auth-token";

pub static TEST_EMAIL: &str = "user@example.com";

pub static TEST_PASSWORD: &str = "correct-horse-battery";

/// Trade number of the mock order.
pub static TEST_TRADE_NO: &str = "2024100112345678";

/// Payment page returned by the mock checkout endpoint.
pub static TEST_PAYMENT_URL: &str = "https://pay.example.com/checkout/2024100112345678";
