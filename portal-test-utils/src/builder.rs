//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring a mock portal backend before a
//! test runs. Endpoint registrations are queued and executed during the final `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, fixtures::factory, TestSetup};

type EndpointBuilder = Box<dyn FnOnce(&mut TestSetup) -> Mock>;

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a [`TestSetup`]
/// whose mocks are verified by [`TestSetup::assert_mocks`].
pub struct TestBuilder {
    // Custom endpoints, created first
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    endpoints: Vec<EndpointBuilder>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    /// Add mock login endpoint returning `credential`.
    ///
    /// # Arguments
    /// - `credential` - Value returned as `auth_data`
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_login_endpoint(mut self, credential: &str, expected_requests: usize) -> Self {
        let credential = credential.to_string();
        self.endpoints.push(Box::new(move |setup| {
            setup.create_login_endpoint(&credential, expected_requests)
        }));
        self
    }

    /// Add mock profile endpoint for an account on `plan_id`.
    pub fn with_user_info_endpoint(mut self, plan_id: Option<i64>, expected_requests: usize) -> Self {
        self.endpoints.push(Box::new(move |setup| {
            setup.create_user_info_endpoint(factory::mock_user_info(plan_id), expected_requests)
        }));
        self
    }

    /// Add mock subscription usage endpoint.
    ///
    /// # Arguments
    /// - `u` - Uploaded bytes reported by the usage endpoint
    /// - `d` - Downloaded bytes reported by the usage endpoint
    /// - `subscribe_url` - Live subscription URL
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_subscription_endpoint(
        mut self,
        u: i64,
        d: i64,
        subscribe_url: &str,
        expected_requests: usize,
    ) -> Self {
        let envelope = factory::mock_subscription(u, d, subscribe_url);
        self.endpoints.push(Box::new(move |setup| {
            setup.create_subscription_endpoint(envelope, expected_requests)
        }));
        self
    }

    /// Add mock plan catalog endpoint with one plan per id.
    pub fn with_plans_endpoint(mut self, plan_ids: Vec<i64>, expected_requests: usize) -> Self {
        let plans = plan_ids
            .into_iter()
            .map(|id| factory::mock_plan(id, &format!("Plan {}", id)))
            .collect();
        self.endpoints.push(Box::new(move |setup| {
            setup.create_plans_endpoint(plans, expected_requests)
        }));
        self
    }

    /// Add mock order detail endpoint.
    ///
    /// # Arguments
    /// - `trade_no` - Trade number matched against the `trade_no` query parameter
    /// - `status` - Wire status of the order
    /// - `balance_amount` - Part of the price covered by account balance
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_order_detail_endpoint(
        mut self,
        trade_no: &str,
        status: u8,
        balance_amount: Option<i64>,
        expected_requests: usize,
    ) -> Self {
        let order = factory::mock_order_detail(trade_no, status, balance_amount);
        self.endpoints.push(Box::new(move |setup| {
            setup.create_order_detail_endpoint(order, expected_requests)
        }));
        self
    }

    pub fn with_payment_methods_endpoint(
        mut self,
        methods: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Box::new(move |setup| {
            setup.create_payment_methods_endpoint(methods, expected_requests)
        }));
        self
    }

    pub fn with_checkout_endpoint(mut self, envelope: Value, expected_requests: usize) -> Self {
        self.endpoints.push(Box::new(move |setup| {
            setup.create_checkout_endpoint(envelope, expected_requests)
        }));
        self
    }

    pub fn with_cancel_order_endpoint(mut self, expected_requests: usize) -> Self {
        self.endpoints.push(Box::new(move |setup| {
            setup.create_cancel_order_endpoint(expected_requests)
        }));
        self
    }

    /// Add mock endpoint answering with an error status.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match
    /// - `path` - Path to match
    /// - `status` - HTTP status to return
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_error_endpoint(
        mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        let method = method.to_string();
        let path = path.to_string();
        self.endpoints.push(Box::new(move |setup| {
            setup.create_error_endpoint(&method, &path, status, None, expected_requests)
        }));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup and create all configured mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Mock backend ready for use
    /// - `Err(TestError::Io)` - The scratch directory could not be created
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;
        let mut mocks = Vec::new();

        // Custom endpoints are created first so tests can register an error response ahead of
        // a success response on the same path
        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for builder in self.endpoints {
            mocks.push(builder(&mut setup));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
