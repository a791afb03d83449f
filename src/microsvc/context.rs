//! Context passed to command handlers.
//!
//! Carries the parsed input, session variables, and a reference to the
//! site. Handlers access everything they need through the context.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HandlerError;
use super::session::Session;
use crate::error::Error;

/// The context passed to every command handler.
///
/// Generic over `R` (the site type) so handlers can run against whatever
/// store the service is configured with.
///
/// ## Example
///
/// ```ignore
/// pub fn handle<S: ModelStore>(ctx: &Context<Site<S>>) -> Result<Value, HandlerError> {
///     let user = ctx.current_user()?;
///     let input = ctx.input::<Input>()?;
///     // ...
/// }
/// ```
pub struct Context<'a, R> {
    /// Raw JSON input from the request.
    input: Value,
    /// Session variables (signed-in user).
    session: Session,
    /// Reference to the site.
    repo: &'a R,
}

impl<'a, R> Context<'a, R> {
    /// Create a new context.
    pub(crate) fn new(input: Value, session: Session, repo: &'a R) -> Self {
        Self {
            input,
            session,
            repo,
        }
    }

    /// Deserialize the input payload into a typed struct.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        serde_json::from_value(self.input.clone())
            .map_err(|e| HandlerError::DecodeFailed(e.to_string()))
    }

    /// The signed-in user, if any, in normalized form.
    pub fn viewer(&self) -> Option<&str> {
        self.session.user()
    }

    /// The signed-in user. Returns `Unauthorized` if nobody is signed in.
    pub fn current_user(&self) -> Result<&str, HandlerError> {
        self.viewer()
            .ok_or_else(|| Error::unauthorized("Please log in").into())
    }

    /// Get a reference to the site.
    pub fn repo(&self) -> &R {
        self.repo
    }

    /// Check if the raw input contains a field.
    pub fn has_field(&self, field: &str) -> bool {
        self.input.get(field).is_some()
    }

    /// Check if the raw input contains all specified fields.
    pub fn has_fields(&self, fields: &[&str]) -> bool {
        fields.iter().all(|f| self.has_field(f))
    }
}
