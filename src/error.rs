/******************************************************************************
   Author: Kavya Learning System Team
   Date: 19/10/26
******************************************************************************/

//! Error handling for the Kavya client
//!
//! Every fallible operation in the crate returns [`AppError`]. Transport,
//! serialization and file errors convert automatically through `From`, so the
//! `?` operator can be used everywhere.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure reported by `reqwest`
    Network(reqwest::Error),
    /// JSON serialization or parsing failure
    Json(serde_json::Error),
    /// File system failure (photo read, certificate save, token store)
    Io(std::io::Error),
    /// The server answered with a non-success status
    Api {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Server supplied message, or the operation's fallback text
        message: String,
    },
    /// Input rejected before any request was sent
    InvalidInput(String),
}

impl AppError {
    /// Builds an API error from a status and a message
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Api {
            status,
            message: message.into(),
        }
    }

    /// Returns the HTTP status for `Api` errors, or the status carried by a
    /// `reqwest` error when there is one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// True when the server rejected the credentials
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Api { message, .. } => write!(f, "{message}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

/// Result alias used across the crate
pub type KavyaResult<T> = Result<T, AppError>;
