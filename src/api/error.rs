//! Error types for card fetching.

use thiserror::Error;

/// Errors that can occur while fetching a page of cards.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: no connectivity, connect refused, timeout.
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status or an unreadable payload.
    #[error("{message}")]
    Api { status: Option<u16>, message: String },

    /// Request parameters rejected before any I/O.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Anything else the HTTP client reports (builder errors, redirects).
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl FetchError {
    /// Classify a `reqwest` error into the fetch taxonomy.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            FetchError::Network { source: err }
        } else if err.is_decode() || err.is_body() {
            FetchError::Api {
                status: err.status().map(|s| s.as_u16()),
                message: format!("Malformed response: {}", err),
            }
        } else if let Some(status) = err.status() {
            FetchError::Api {
                status: Some(status.as_u16()),
                message: format!("HTTP {}", status),
            }
        } else {
            FetchError::Client(err.to_string())
        }
    }

    /// Error for a response with a non-success status code.
    pub fn status(status: u16, reason: Option<&str>) -> Self {
        let message = match reason {
            Some(reason) if !reason.is_empty() => format!("HTTP {}: {}", status, reason),
            _ => format!("HTTP {}", status),
        };
        FetchError::Api {
            status: Some(status),
            message,
        }
    }

    /// Error for a body that is not a valid card page.
    pub fn malformed(err: serde_json::Error) -> Self {
        FetchError::Api {
            status: None,
            message: format!("Malformed response: {}", err),
        }
    }

    /// Short machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network",
            FetchError::Api { .. } => "api",
            FetchError::InvalidRequest(_) => "invalid_request",
            FetchError::Client(_) => "client",
        }
    }
}
