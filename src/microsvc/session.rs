//! Session variables forwarded by the session layer in front of the site.

use std::collections::HashMap;

use crate::query::normalize_username;

/// Header carrying the signed-in username.
pub const USER_HEADER: &str = "x-session-user";

/// Parsed session variables from the incoming request.
///
/// The cookie/session middleware resolves the browser session and forwards
/// the result as plain variables:
///
/// ```json
/// { "x-session-user": "alice" }
/// ```
///
/// The username is stored trimmed and lowercased, the same form accounts
/// are registered under.
#[derive(Debug, Clone, Default)]
pub struct Session {
    variables: HashMap<String, String>,
}

impl Session {
    /// Create an empty (anonymous) session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session for a signed-in user.
    pub fn for_user(username: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.set(USER_HEADER, username);
        session
    }

    /// Create a session from a map of variables.
    pub fn from_map(variables: HashMap<String, String>) -> Self {
        let mut session = Self::new();
        for (key, value) in variables {
            session.set(key, value);
        }
        session
    }

    /// The signed-in username, if any. Blank values count as absent.
    pub fn user(&self) -> Option<&str> {
        self.get(USER_HEADER).filter(|u| !u.is_empty())
    }

    /// Get a session variable by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|v| v.as_str())
    }

    /// Set a session variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let mut value = value.into();
        if key == USER_HEADER {
            value = normalize_username(&value);
        }
        self.variables.insert(key, value);
    }
}
