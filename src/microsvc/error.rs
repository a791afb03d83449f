//! Error types for microsvc command handlers.

use thiserror::Error;

use crate::error::Error as SiteError;

/// Error type for command handler operations.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// No handler registered for this command name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// Payload decode / deserialization failed.
    #[error("decode failed: {0}")]
    DecodeFailed(String),
    /// Guard rejected the command (required fields missing).
    #[error("guard rejected command: {0}")]
    GuardRejected(String),
    /// The site operation itself failed.
    #[error(transparent)]
    Site(#[from] SiteError),
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::UnknownCommand(_) => 404,
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::GuardRejected(_) => 400,
            HandlerError::Site(SiteError::Validation(_)) => 400,
            HandlerError::Site(SiteError::Unauthorized(_)) => 401,
            HandlerError::Site(SiteError::NotFound(_)) => 404,
            HandlerError::Site(SiteError::Transient(_)) => 503,
        }
    }

    /// The message shown to the end user.
    pub fn user_message(&self) -> String {
        match self {
            HandlerError::Site(err) => err.user_message(),
            HandlerError::GuardRejected(_) => "Please fill in all required fields".to_string(),
            other => other.to_string(),
        }
    }
}
