//! ObjectId - Opaque store-issued document identifiers.
//!
//! An id is 24 lowercase hex characters: an 8-digit seconds timestamp
//! followed by a 16-digit issue sequence. Lexical order equals issue order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const ID_LEN: usize = 24;

/// A well-formed document id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid id")]
pub struct ObjectIdError(pub String);

impl ObjectId {
    /// Build an id from a seconds timestamp and a per-store sequence number.
    pub fn from_parts(seconds: u32, sequence: u64) -> Self {
        Self(format!("{:08x}{:016x}", seconds, sequence))
    }

    /// Validate the shape of an externally supplied id.
    pub fn parse(raw: &str) -> Result<Self, ObjectIdError> {
        let trimmed = raw.trim();
        if trimmed.len() != ID_LEN || !trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ObjectIdError(raw.to_string()));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ObjectId {
    type Error = ObjectIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
