//! Handler: work.favourite

use serde::Deserialize;
use serde_json::{json, Value};

use crate::favourites;
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;
use crate::site::Site;

pub const COMMAND: &str = "work.favourite";

#[derive(Deserialize)]
pub struct Input {
    pub work_id: String,
}

pub fn guard<S: ModelStore>(ctx: &Context<Site<S>>) -> bool {
    ctx.has_field("work_id")
}

pub fn handle<S: ModelStore>(ctx: &Context<Site<S>>) -> Result<Value, HandlerError> {
    let user = ctx.current_user()?;
    let input = ctx.input::<Input>()?;
    let outcome = favourites::favourite(ctx.repo().store(), user, &input.work_id)?;

    Ok(json!({ "created": outcome.created, "message": outcome.message() }))
}
