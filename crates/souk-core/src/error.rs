use thiserror::Error;

/// Application-wide error types for souk.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid fetch parameters or server configuration. Raised before any I/O.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// HTTP-level failure that is not a transport error (request build,
    /// body read). Never retried.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Network/connection error (connection refused/reset, DNS failure).
    #[error("Network error: {0}")]
    NetworkError(String),

    /// All fetch attempts failed; wraps the last attempt's error.
    #[error("All {attempts} fetch attempts failed: {last}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: Box<AppError>,
    },

    /// Caller requested early termination mid-fetch.
    #[error("Fetch cancelled")]
    Cancelled,

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Returns true if this is a transport-level failure worth retrying.
    ///
    /// Only timeouts and network errors qualify; an HTTP response with a
    /// non-2xx status is not an error at the fetch layer, and request build
    /// failures are terminal.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Timeout(_) | AppError::NetworkError(_))
    }
}
