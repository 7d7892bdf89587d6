//! Error types for the widget.

use thiserror::Error;

/// Widget error type.
///
/// The answer-path variants (`Service`, `Status`, `Decode`, `Transport`) are
/// never shown to the user; the controller logs them and renders the
/// configured fallback text instead. The remaining variants are setup
/// errors returned to the host.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// The answer service responded with an `error` field.
    #[error("Service error: {0}")]
    Service(String),

    /// Non-success status without an `error` body.
    #[error("HTTP status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Response body was not a recognizable reply.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The request could not complete.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required element id is not present in the host page.
    #[error("Missing element: #{0}")]
    MissingElement(String),

    /// Any other failure reported by the browser.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl WidgetError {
    /// Whether the answer service itself reported this failure, as opposed
    /// to the request failing in transit or in decoding.
    #[must_use]
    pub fn is_service_reported(&self) -> bool {
        matches!(self, Self::Service(_))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<config::ConfigError> for WidgetError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;
