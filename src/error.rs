//! Error types for the Onfido API client.
//!
//! [`Error`] covers every failure mode the crate can surface: request
//! construction, transport, API-level rejections, decoding, and webhook
//! signature verification. API rejections carry a structured [`ApiError`]
//! decoded from the provider's error envelope.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// A specialized `Result` type for Onfido operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Onfido API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (connection, TLS, protocol errors)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The in-flight request was cancelled by the configured deadline
    #[error("request timed out")]
    Timeout,

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API returned a non-2xx response
    #[error("{0}")]
    Api(#[from] ApiError),

    /// The response body could not be routed into the requested target type
    #[error("unable to parse response body into {target} (content type {content_type:?})")]
    UnsupportedResponse {
        /// Name of the type the caller asked to decode into
        target: &'static str,
        /// `Content-Type` the server actually sent, if any
        content_type: Option<String>,
    },

    /// Webhook payload hash doesn't match the signature header
    #[error("invalid request, payload hash doesn't match signature")]
    InvalidSignature,

    /// URL parsing error while building a request
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Missing or invalid client/webhook configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid input provided to a function
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns the HTTP status code if this is an API error with a response
    /// attached.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(api) => api.status,
            _ => None,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (bad request, validation failure, invalid input).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api(api) => api.status.is_some_and(|s| (400..500).contains(&s)),
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api(api) => api.status.is_some_and(|s| s >= 500),
            _ => false,
        }
    }
}

/// A structured error decoded from the Onfido error envelope.
///
/// The wire shape is `{"error": {"id": ..., "type": ..., "message": ...,
/// "fields": {...}}}`. The HTTP status code of the rejected response is
/// always attached, even when the body carried no decodable error object.
#[derive(Debug, Default, Deserialize)]
pub struct ApiError {
    /// HTTP status code of the rejected response.
    #[serde(skip)]
    pub status: Option<u16>,
    /// Provider-assigned error identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Error type, e.g. `validation_error`.
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Per-field validation messages keyed by field name.
    #[serde(default)]
    pub fields: HashMap<String, serde_json::Value>,
}

/// Wire envelope wrapping [`ApiError`] in error responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub(crate) error: ApiError,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, self.status) {
            (Some(msg), _) if !msg.is_empty() => write!(f, "{msg}"),
            (_, Some(status)) => {
                write!(f, "http request failed with status code {status}")
            }
            _ => write!(f, "an unknown error occurred"),
        }
    }
}

impl std::error::Error for ApiError {}
