//! Fetch error types.

use thiserror::Error;

/// Error type for upstream fetch operations.
///
/// Every variant carries the URL that failed so the run boundary (CLI error
/// line, 502 response body) can name it.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: connection error, timeout, malformed reply.
    #[error("failed to fetch {url}: {source}")]
    Transport {
        /// The URL that was being fetched.
        url: String,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The resource does not exist upstream (HTTP 404).
    ///
    /// Only broadcast-round resolution treats this as recoverable; everywhere
    /// else it propagates like any other failure.
    #[error("not found: {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// Any other non-2xx response.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// The URL that was being fetched.
        url: String,
        /// The response status code.
        status: reqwest::StatusCode,
    },

    /// The response body was not valid JSON.
    #[error("invalid JSON from {url}: {source}")]
    Json {
        /// The URL whose body failed to parse.
        url: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Returns true for the distinguishable not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The URL this error originated from.
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. }
            | Self::NotFound { url }
            | Self::Status { url, .. }
            | Self::Json { url, .. } => url,
        }
    }
}
