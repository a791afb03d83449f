use thiserror::Error;

use crate::model::{ModelError, ObjectIdError};

/// The closed set of failures every core operation can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed or missing input. Always correctable by the user.
    #[error("validation failed: {0}")]
    Validation(String),
    /// A referenced work or user does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// No session, bad credentials, or not the owner of the work.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// The store failed for infrastructure reasons. The caller may retry.
    #[error("store unavailable: {0}")]
    Transient(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Error::Unauthorized(msg.into())
    }

    /// The message shown to the end user.
    ///
    /// Transient failures stay generic; their detail goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(msg) | Error::NotFound(msg) | Error::Unauthorized(msg) => {
                msg.clone()
            }
            Error::Transient(_) => "Something went wrong, please try again".to_string(),
        }
    }
}

impl From<ModelError> for Error {
    fn from(err: ModelError) -> Self {
        Error::Transient(err.to_string())
    }
}

impl From<ObjectIdError> for Error {
    fn from(err: ObjectIdError) -> Self {
        Error::Validation(err.to_string())
    }
}
