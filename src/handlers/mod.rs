//! Command handlers, one file per command.
//!
//! Each module exports:
//! - `COMMAND` — the command name
//! - `guard` — required-field check
//! - `handle` — the handler

use crate::microsvc::Service;
use crate::model::ModelStore;
use crate::site::Site;

pub mod user_login;
pub mod user_logout;
pub mod user_register;
pub mod work_create;
pub mod work_delete;
pub mod work_favourite;
pub mod work_get;
pub mod work_unfavourite;
pub mod work_update;
pub mod works_favourites;
pub mod works_filter;
pub mod works_home;
pub mod works_profile;
pub mod works_search;

/// A service with every site command registered.
pub fn service<S: ModelStore + 'static>(site: Site<S>) -> Service<Site<S>> {
    crate::register_handlers!(
        Service::new(site),
        user_register,
        user_login,
        user_logout,
        works_home,
        works_filter,
        works_search,
        works_profile,
        works_favourites,
        work_create,
        work_get,
        work_update,
        work_delete,
        work_favourite,
        work_unfavourite,
    )
}
