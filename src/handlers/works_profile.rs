//! Handler: works.profile

use serde_json::{json, Value};

use crate::listing::{self, Listing};
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;
use crate::site::Site;

pub const COMMAND: &str = "works.profile";

pub fn guard<S: ModelStore>(_ctx: &Context<Site<S>>) -> bool {
    true
}

pub fn handle<S: ModelStore>(ctx: &Context<Site<S>>) -> Result<Value, HandlerError> {
    let username = ctx.current_user()?;
    let view = listing::page(ctx.repo().store(), Some(username), Listing::Profile)?;
    Ok(json!({ "username": username, "view": view }))
}
