//! Failures a headline fetch can end in.

use serde::Deserialize;

/// Errors returned by [`HeadlineSource`](super::HeadlineSource) implementations.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The server could not be reached or the transfer broke off.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// A 2xx body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A 2xx envelope carrying `"status": "error"`.
    #[error("request rejected ({code}): {message}")]
    Rejected { code: String, message: String },

    /// The configured base URL cannot be turned into an endpoint.
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Error envelope NewsAPI sends alongside 4xx/5xx and `"status":"error"`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorEnvelope {
    /// Try to read an error envelope out of a response body.
    pub(crate) fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a failed response.
    ///
    /// The message prefers the envelope's `message`, then the raw body, then
    /// the status's reason phrase.
    pub(crate) fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = ErrorEnvelope::parse(body)
            .and_then(|e| e.message)
            .filter(|m| !m.trim().is_empty())
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string()
            });

        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

/// Text shown to the user for a failed fetch.
///
/// Never empty: a failure whose display text is blank becomes
/// `"unknown error"`.
pub fn error_message(err: &dyn std::error::Error) -> String {
    let text = err.to_string();
    if text.trim().is_empty() {
        "unknown error".to_string()
    } else {
        text
    }
}
