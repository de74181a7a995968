//! Error types for the Skyline portal client.
//!
//! This module provides the error handling system for the client core, with specialized error
//! types for each domain (backend API, configuration, session storage). All errors use
//! `thiserror` for `Display` and `Error` implementations and convert into the top-level
//! [`Error`] through `#[from]` so callers can propagate them with `?`.

pub mod api;
pub mod config;
pub mod failure;
pub mod storage;

use thiserror::Error;

use crate::error::{api::ApiError, config::ConfigError, storage::StorageError};

/// Main error type for the Skyline portal client.
///
/// This enum aggregates the domain-specific error types into a single unified error type.
/// Most operations of the client core return the narrower domain error directly; this type is
/// used at the edges (startup, the binary) where several domains meet.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Backend API error (HTTP status, transport, decoding or envelope rejection).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Session storage error (file I/O, JSON serialization).
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Failed to build the underlying HTTP client.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
}
