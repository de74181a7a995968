//! Backend fixtures for integration tests.
//!
//! - `factory` - JSON bodies shaped like the portal backend's responses
//! - `mockito` - Mock endpoint registration on the [`TestSetup`](crate::TestSetup) server

pub mod factory;
pub mod mockito;
