use thiserror::Error;

use crate::types::ComponentKind;

/// Result type alias for TrustGuard operations
pub type Result<T> = std::result::Result<T, TrustGuardError>;

/// Errors that can occur while scoring reviews or talking to the services
#[derive(Error, Debug)]
pub enum TrustGuardError {
    /// A trust component required for aggregation was not supplied
    #[error("missing trust component: {component}")]
    MissingComponent {
        /// The component that was absent
        component: ComponentKind,
    },

    /// A component score was outside 0..=100 or not a finite number
    #[error("invalid score {score} for component {component}")]
    InvalidScore {
        /// The offending component
        component: ComponentKind,
        /// The rejected score
        score: f64,
    },

    /// Component weights do not sum to 1.0
    #[error("component weights must sum to 1.0, got {sum}")]
    InvalidWeights {
        /// Actual sum of the weights
        sum: f64,
    },

    /// Star rating outside 1..=5
    #[error("invalid star rating: {0} (expected 1-5)")]
    InvalidRating(u8),

    /// Push message could not be decoded
    #[error("malformed push message: {0}")]
    MalformedMessage(String),

    /// Resource not found
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// Service returned a non-success response
    #[error("service error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the service
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl TrustGuardError {
    /// Returns true if the error came from an unreachable or failing service.
    ///
    /// These are recovered locally and never surfaced to callers of the
    /// fallback paths.
    #[must_use]
    pub const fn is_service_failure(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Api { .. }
                | Self::Http(_)
                | Self::Timeout(_)
                | Self::Connection(_)
                | Self::Json(_)
        )
    }

    /// Returns true if the caller broke the input contract
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::MissingComponent { .. }
                | Self::InvalidScore { .. }
                | Self::InvalidWeights { .. }
                | Self::InvalidRating(_)
        )
    }

    /// Returns the HTTP status code if this is a service error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
