//! Favourites: the idempotent like/unlike toggle and the per-user resolver.
//!
//! At most one [`Favourite`] exists per (user, work) pair. Creation is a
//! single insert-if-absent keyed on that pair, so a double submit can never
//! leave two documents behind.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::documents::{Favourite, Work};
use crate::error::{Error, Result};
use crate::model::{ModelStore, ModelsExt, ObjectId};
use crate::query::{normalize_username, Filter};
use crate::works;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FavouriteOutcome {
    pub created: bool,
}

impl FavouriteOutcome {
    pub fn message(&self) -> &'static str {
        if self.created {
            "Added to favourites"
        } else {
            "Already in favourites"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnfavouriteOutcome {
    pub removed: bool,
}

impl UnfavouriteOutcome {
    pub fn message(&self) -> &'static str {
        if self.removed {
            "Removed from favourites"
        } else {
            "Not in favourites"
        }
    }
}

fn pair_key(user: &str, work_id: &ObjectId) -> Filter {
    Filter::and([
        Filter::eq("user", user),
        Filter::eq("work_id", work_id.as_str()),
    ])
}

fn require_user(user: &str) -> Result<String> {
    let user = normalize_username(user);
    if user.is_empty() {
        return Err(Error::unauthorized("Please log in to manage favourites"));
    }
    Ok(user)
}

/// Mark a work as a favourite of `user`. A repeat call changes nothing.
pub fn favourite<S: ModelStore>(store: &S, user: &str, work_id: &str) -> Result<FavouriteOutcome> {
    let user = require_user(user)?;
    let user = user.as_str();
    let work = works::get(store, work_id)?;

    let created = store
        .models::<Favourite>()
        .insert_if_absent(&pair_key(user, &work.id), &Favourite::new(user, &work.id))?;

    if created {
        info!(user, work = %work.id, "favourite added");
    } else {
        debug!(user, work = %work.id, "favourite already present");
    }
    Ok(FavouriteOutcome { created })
}

/// Remove a favourite. Removing one that does not exist is not an error.
pub fn unfavourite<S: ModelStore>(
    store: &S,
    user: &str,
    work_id: &str,
) -> Result<UnfavouriteOutcome> {
    let user = require_user(user)?;
    let user = user.as_str();
    let work_id = ObjectId::parse(work_id)?;

    let removed = store
        .models::<Favourite>()
        .delete(&Favourite::key(user, &work_id))?;

    if removed {
        info!(user, work = %work_id, "favourite removed");
    }
    Ok(UnfavouriteOutcome { removed })
}

/// Ids of every work `user` has favourited. Empty for anonymous viewers.
pub fn favourite_ids<S: ModelStore>(store: &S, user: Option<&str>) -> Result<HashSet<ObjectId>> {
    let Some(user) = user.map(normalize_username).filter(|u| !u.is_empty()) else {
        return Ok(HashSet::new());
    };
    Ok(store
        .models::<Favourite>()
        .find(&Filter::eq("user", user.as_str()))?
        .into_iter()
        .map(|f| f.work_id)
        .collect())
}

/// The works `user` has favourited, newest first.
///
/// Favourites whose work has since been deleted are skipped.
pub fn list_favourites<S: ModelStore>(store: &S, user: &str) -> Result<Vec<Work>> {
    let ids = favourite_ids(store, Some(user))?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    works::recent(
        store,
        &Filter::any_of("id", ids.iter().map(|id| id.as_str().to_string())),
    )
}
