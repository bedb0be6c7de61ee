//! Error type for the NYPL Platform client.
//!
//! Every failure surfaced by this library, whether an OAuth server rejection,
//! a transport problem or a malformed token response, is reported as a
//! [`PlatformError`] so callers only have one type to match on.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum PlatformError {
    /// The OAuth server returned a non-2xx response
    ApiError {
        /// HTTP status code of the response
        status: StatusCode,
        /// Raw response body, usually a JSON error payload
        body: String,
    },
    /// The token endpoint response is missing a required field
    MissingTokenField(&'static str),
    /// Underlying HTTP request failed (timeout, connection error, etc.)
    Request(reqwest::Error),
    /// Response body could not be decoded as JSON
    Json(serde_json::Error),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::ApiError { status, body } => {
                write!(f, "oauth server returned {status}: {body}")
            }
            PlatformError::MissingTokenField(field) => {
                write!(f, "missing {field} parameter in the oauth server response")
            }
            PlatformError::Request(e) => write!(f, "request error: {e}"),
            PlatformError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlatformError::Request(e) => Some(e),
            PlatformError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PlatformError {
    fn from(e: reqwest::Error) -> Self {
        PlatformError::Request(e)
    }
}

impl From<serde_json::Error> for PlatformError {
    fn from(e: serde_json::Error) -> Self {
        PlatformError::Json(e)
    }
}
