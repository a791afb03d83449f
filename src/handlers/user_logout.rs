//! Handler: user.logout
//!
//! The session layer drops the session; this only acknowledges it.

use serde_json::{json, Value};

use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;
use crate::site::Site;

pub const COMMAND: &str = "user.logout";

pub fn guard<S: ModelStore>(_ctx: &Context<Site<S>>) -> bool {
    true
}

pub fn handle<S: ModelStore>(_ctx: &Context<Site<S>>) -> Result<Value, HandlerError> {
    Ok(json!({ "message": "You have been logged out" }))
}
