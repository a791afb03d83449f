//! quill — the core of a multi-user writing site.
//!
//! Users publish short works tagged by genre, browse and search everyone's
//! works, and keep a list of favourites. All state lives in a document store
//! behind [`model::ModelStore`]; the site itself holds none.
//!
//! ## Example
//!
//! ```ignore
//! use quill::{favourites, works, Site};
//!
//! let site = Site::in_memory();
//! let dawn = works::publish(site.store(), "alice", new_work)?;
//! let outcome = favourites::favourite(site.store(), "bob", dawn.id.as_str())?;
//! assert!(outcome.created);
//! ```

pub mod accounts;
pub mod catalog;
pub mod config;
pub mod documents;
mod error;
pub mod favourites;
pub mod handlers;
pub mod listing;
pub mod microsvc;
pub mod model;
pub mod query;
mod site;
pub mod works;

pub use error::{Error, Result};
pub use site::Site;
