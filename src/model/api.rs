//! Response envelopes used by the portal backend.

use serde::{Deserialize, Serialize};

/// Standard `{ "data": T }` envelope returned by most endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// The response body of a failed API request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message, absent for some gateway errors
    #[serde(default)]
    pub message: Option<String>,
}

/// One page of a paginated listing: `{ "data": [T], "total": n }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedData<T> {
    pub data: Vec<T>,
    /// Total number of items across all pages
    pub total: i64,
}
