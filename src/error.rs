//! Error types for wiki fetching and orchestration
//!
//! Extraction itself never fails: missing structure is represented as empty
//! maps, empty vectors or `None`. These errors only come from the fetch
//! collaborator, the disk cache and configuration.

use thiserror::Error;

/// Result type alias for wiki operations
pub type WikiResult<T> = Result<T, WikiError>;

/// Error types for wiki operations
#[derive(Debug, Error)]
pub enum WikiError {
    /// Transport-level failure from the HTTP client
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// A page title or base URL could not be turned into a URL
    #[error("Invalid URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// IO error (cache file access)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache file (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration rejected by the builder
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl WikiError {
    /// Check if error is transient and a caller-side retry may succeed
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            WikiError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            WikiError::Status { status, .. } => *status == 429 || *status >= 500,
            WikiError::Io(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_classify_transience() {
        let busy = WikiError::Status {
            url: "https://example.com/A".to_string(),
            status: 503,
        };
        let missing = WikiError::Status {
            url: "https://example.com/B".to_string(),
            status: 404,
        };
        assert!(busy.is_transient());
        assert!(!missing.is_transient());
        assert_eq!(missing.to_string(), "HTTP 404 for https://example.com/B");
    }
}
