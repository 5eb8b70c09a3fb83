//! Delay feed error types.

use std::fmt;

/// Errors from the real-time delay feed.
///
/// None of these are fatal: the board falls back to scheduled times.
#[derive(Debug)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Missing or invalid access token
    Unauthorized,
}

impl FeedError {
    /// Build a JSON error, keeping the start of the body for diagnostics.
    pub(crate) fn json(err: serde_json::Error, body: &str) -> Self {
        FeedError::Json {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Http(e) => write!(f, "HTTP error: {e}"),
            FeedError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            FeedError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            FeedError::Unauthorized => {
                write!(f, "unauthorized (check ACCESS_TOKEN)")
            }
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Http(err)
    }
}
