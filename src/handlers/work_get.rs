//! Handler: work.get
//!
//! Loads a work for the edit form, along with the genre list.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog;
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;
use crate::site::Site;
use crate::works;

pub const COMMAND: &str = "work.get";

#[derive(Deserialize)]
pub struct Input {
    pub work_id: String,
}

pub fn guard<S: ModelStore>(ctx: &Context<Site<S>>) -> bool {
    ctx.has_field("work_id")
}

pub fn handle<S: ModelStore>(ctx: &Context<Site<S>>) -> Result<Value, HandlerError> {
    ctx.current_user()?;
    let input = ctx.input::<Input>()?;
    let store = ctx.repo().store();
    let work = works::get(store, &input.work_id)?;
    let genres: Vec<String> = catalog::genres(store)?
        .into_iter()
        .map(|g| g.genre_name)
        .collect();

    Ok(json!({ "work": work, "genres": genres }))
}
