//! Handler: work.create

use serde_json::{json, Value};

use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;
use crate::site::Site;
use crate::works::{self, NewWork};

pub const COMMAND: &str = "work.create";

pub fn guard<S: ModelStore>(ctx: &Context<Site<S>>) -> bool {
    ctx.has_field("title")
}

pub fn handle<S: ModelStore>(ctx: &Context<Site<S>>) -> Result<Value, HandlerError> {
    let author = ctx.current_user()?;
    let input = ctx.input::<NewWork>()?;
    let work = works::publish(ctx.repo().store(), author, input)?;

    Ok(json!({ "work": work, "message": "Work Successfully Published" }))
}
