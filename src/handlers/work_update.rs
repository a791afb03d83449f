//! Handler: work.update

use serde::Deserialize;
use serde_json::{json, Value};

use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;
use crate::site::Site;
use crate::works::{self, WorkEdit};

pub const COMMAND: &str = "work.update";

#[derive(Deserialize)]
pub struct Input {
    pub work_id: String,
    #[serde(flatten)]
    pub edit: WorkEdit,
}

pub fn guard<S: ModelStore>(ctx: &Context<Site<S>>) -> bool {
    ctx.has_field("work_id")
}

pub fn handle<S: ModelStore>(ctx: &Context<Site<S>>) -> Result<Value, HandlerError> {
    let user = ctx.current_user()?;
    let input = ctx.input::<Input>()?;
    let work = works::update(ctx.repo().store(), user, &input.work_id, input.edit)?;

    Ok(json!({ "work": work, "message": "Work Successfully Updated" }))
}
