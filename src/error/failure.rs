use super::api::ApiError;

/// Cross-cutting class of a failed backend request.
///
/// Decides which transient notification (if any) the transport error interceptor raises,
/// independently of how the originating caller handles the error itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 401 - credential rejected, the session must be ended
    Authentication,
    /// 5xx - backend failure
    Server,
    /// No HTTP response at all (status 0)
    Connectivity,
    /// Anything else, handled only by the originating caller
    Request,
}

impl ApiError {
    /// Determine the failure class based upon the API error
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Status { status, .. } => match *status {
                401 => FailureKind::Authentication,

                // Backend temporarily unavailable or broken
                s if s >= 500 => FailureKind::Server,

                // Some gateways report an unreachable upstream as status 0
                0 => FailureKind::Connectivity,

                _ => FailureKind::Request,
            },

            Self::Network(_) => FailureKind::Connectivity,

            // Malformed bodies and envelope rejections are request-specific
            Self::Decode(_) => FailureKind::Request,
            Self::Rejected(_) => FailureKind::Request,
        }
    }
}
