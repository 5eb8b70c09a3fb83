//! Status page error types.

/// Errors that can occur when fetching or parsing the status page.
#[derive(Debug, thiserror::Error)]
pub enum StatusPageError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Page returned an error status
    #[error("status page error {status}: {message}")]
    Api { status: u16, message: String },

    /// A configured CSS selector doesn't parse
    #[error("invalid selector: {0}")]
    Selector(String),
}
