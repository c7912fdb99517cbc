//! Error types
//!
//! Every backend failure collapses into [`SearchError`]. The variant keeps
//! the cause for logs; the user only ever sees [`SEARCH_FAILED_MESSAGE`].

use std::path::PathBuf;

use thiserror::Error;

/// Text shown in the error banner whenever a search fails.
pub const SEARCH_FAILED_MESSAGE: &str = "An error occurred while fetching data. Please try again.";

/// A failed search. `Clone` so it can ride inside iced messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The request never produced a response (connect, DNS, TLS, ...).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Reported by a custom backend.
    #[error("{0}")]
    Backend(String),
}

impl SearchError {
    /// The fixed message presented to the user, independent of the cause.
    pub fn user_message(&self) -> &'static str {
        SEARCH_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchError::Decode(err.to_string())
        } else {
            SearchError::Request(err.to_string())
        }
    }
}

/// Failure while resolving [`crate::config::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_cause() {
        let errors = [
            SearchError::Request("connection refused".into()),
            SearchError::Status { status: 502, body: "bad gateway".into() },
            SearchError::Decode("expected value at line 1".into()),
            SearchError::Backend("quota exceeded".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), SEARCH_FAILED_MESSAGE);
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_status_display_keeps_detail() {
        let err = SearchError::Status { status: 404, body: "no route".into() };
        assert_eq!(err.to_string(), "backend returned 404: no route");
    }
}
