//! Handler: works.search
//!
//! Case-insensitive substring search on one searchable field.

use serde::Deserialize;
use serde_json::Value;

use crate::listing::{self, Listing};
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;
use crate::site::Site;

pub const COMMAND: &str = "works.search";

#[derive(Deserialize)]
pub struct Input {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub query: String,
}

pub fn guard<S: ModelStore>(_ctx: &Context<Site<S>>) -> bool {
    true
}

pub fn handle<S: ModelStore>(ctx: &Context<Site<S>>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;
    let view = listing::page(
        ctx.repo().store(),
        ctx.viewer(),
        Listing::Search {
            field: &input.key,
            term: &input.query,
        },
    )?;
    Ok(serde_json::to_value(view)?)
}
