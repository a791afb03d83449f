//! Handler: work.delete

use serde::Deserialize;
use serde_json::{json, Value};

use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;
use crate::site::Site;
use crate::works;

pub const COMMAND: &str = "work.delete";

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
    works::delete(ctx.repo().store(), user, &input.work_id)?;

    Ok(json!({ "message": "Work Successfully Deleted" }))
}
