//! Error types for the trivia API

use thiserror::Error;

use super::models::describe_response_code;

/// Errors that can occur when fetching questions
#[derive(Debug, Error)]
pub enum TriviaError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// API answered 200 but flagged the request as failed
    #[error("Trivia API returned code {code}: {reason}")]
    ResponseCode {
        /// Value of the `response_code` field
        code: u8,
        /// Meaning of the code
        reason: &'static str,
    },

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The configured endpoint is not a usable URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl TriviaError {
    /// Error for a non-zero `response_code`
    pub fn response_code(code: u8) -> Self {
        TriviaError::ResponseCode { code, reason: describe_response_code(code) }
    }

    /// Whether a fresh attempt could plausibly succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            TriviaError::RequestError(_) => true,
            TriviaError::ApiError { status, .. } => *status == 429 || *status >= 500,
            TriviaError::ResponseCode { code, .. } => *code == 5,
            TriviaError::JsonError(_) | TriviaError::InvalidUrl(_) => false,
        }
    }
}
