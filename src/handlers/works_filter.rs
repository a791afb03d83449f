//! Handler: works.filter
//!
//! Works in one genre.

use serde::Deserialize;
use serde_json::Value;

use crate::listing::{self, Listing};
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;
use crate::site::Site;

pub const COMMAND: &str = "works.filter";

#[derive(Deserialize)]
pub struct Input {
    #[serde(default)]
    pub genre_name: String,
}

pub fn guard<S: ModelStore>(_ctx: &Context<Site<S>>) -> bool {
    true
}

pub fn handle<S: ModelStore>(ctx: &Context<Site<S>>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;
    let view = listing::page(
        ctx.repo().store(),
        ctx.viewer(),
        Listing::Genre(&input.genre_name),
    )?;
    Ok(serde_json::to_value(view)?)
}
