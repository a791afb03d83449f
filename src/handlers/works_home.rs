//! Handler: works.home

use serde_json::Value;

use crate::listing::{self, Listing};
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;
use crate::site::Site;

pub const COMMAND: &str = "works.home";

pub fn guard<S: ModelStore>(_ctx: &Context<Site<S>>) -> bool {
    true
}

pub fn handle<S: ModelStore>(ctx: &Context<Site<S>>) -> Result<Value, HandlerError> {
    let view = listing::page(ctx.repo().store(), ctx.viewer(), Listing::Home)?;
    Ok(serde_json::to_value(view)?)
}
