//! Portal backend mock endpoint creation utilities.
//!
//! Each method registers one endpoint on the mockito server that verifies it was called the
//! expected number of times. Bodies are wrapped in the envelope the real endpoint uses.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::TestSetup;

impl TestSetup {
    /// Create a mock HTTP endpoint for `/passport/auth/login`.
    ///
    /// # Arguments
    /// - `credential` - Value returned as `auth_data`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_login_endpoint(&mut self, credential: &str, expected_requests: usize) -> Mock {
        self.create_data_endpoint(
            "POST",
            "/passport/auth/login",
            json!({ "auth_data": credential }),
            expected_requests,
        )
    }

    pub fn create_user_info_endpoint(&mut self, user: Value, expected_requests: usize) -> Mock {
        self.create_data_endpoint("GET", "/user/info", user, expected_requests)
    }

    /// Create a mock HTTP endpoint for `/user/getSubscribe`.
    ///
    /// The body is returned as-is since this endpoint has its own envelope.
    pub fn create_subscription_endpoint(
        &mut self,
        envelope: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", "/user/getSubscribe")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope.to_string())
            .expect(expected_requests)
            .create()
    }

    pub fn create_plans_endpoint(&mut self, plans: Vec<Value>, expected_requests: usize) -> Mock {
        self.create_data_endpoint(
            "GET",
            "/user/plan/fetch",
            Value::Array(plans),
            expected_requests,
        )
    }

    /// Create a mock HTTP endpoint for `/user/order/detail` of one order.
    ///
    /// # Arguments
    /// - `order` - Order detail payload, its `trade_no` is matched against the query
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_order_detail_endpoint(&mut self, order: Value, expected_requests: usize) -> Mock {
        let trade_no = order["trade_no"].as_str().unwrap_or_default().to_string();

        self.server
            .mock("GET", "/user/order/detail")
            .match_query(Matcher::UrlEncoded("trade_no".into(), trade_no))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "data": order }).to_string())
            .expect(expected_requests)
            .create()
    }

    pub fn create_payment_methods_endpoint(
        &mut self,
        methods: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", "/user/order/getPaymentMethod")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "status": "success", "data": methods }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for `/user/order/checkout`.
    ///
    /// The body is returned as-is since checkout has its own `{ type, data, message }` envelope.
    pub fn create_checkout_endpoint(&mut self, envelope: Value, expected_requests: usize) -> Mock {
        self.server
            .mock("POST", "/user/order/checkout")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope.to_string())
            .expect(expected_requests)
            .create()
    }

    pub fn create_cancel_order_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.create_data_endpoint(
            "POST",
            "/user/order/cancel",
            Value::Bool(true),
            expected_requests,
        )
    }

    /// Create a mock HTTP endpoint answering with an error status.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match
    /// - `path` - Path to match, any query string is accepted
    /// - `status` - HTTP status to return
    /// - `message` - `message` field of the error body, omitted when `None`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        message: Option<&str>,
        expected_requests: usize,
    ) -> Mock {
        let body = match message {
            Some(message) => json!({ "message": message }),
            None => json!({}),
        };

        self.server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint returning `{ data }`.
    pub fn create_data_endpoint(
        &mut self,
        method: &str,
        path: &str,
        data: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "data": data }).to_string())
            .expect(expected_requests)
            .create()
    }
}
