//! Handler: user.register

use serde::Deserialize;
use serde_json::{json, Value};

use crate::accounts;
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;
use crate::site::Site;

pub const COMMAND: &str = "user.register";

#[derive(Deserialize)]
pub struct Input {
    pub username: String,
    pub password: String,
}

pub fn guard<S: ModelStore>(ctx: &Context<Site<S>>) -> bool {
    ctx.has_fields(&["username", "password"])
}

pub fn handle<S: ModelStore>(ctx: &Context<Site<S>>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;
    let site = ctx.repo();
    let username = accounts::register(site.store(), site.hasher(), &input.username, &input.password)?;

    Ok(json!({ "username": username, "message": "Registration Successful!" }))
}
