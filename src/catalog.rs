//! Reference data: genres and searchable fields.
//!
//! Both lists are read-only to the site. They are populated out of band,
//! normally by [`seed`] at startup.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::info;

use crate::documents::{Genre, SearchKey, WORK_TEXT_FIELDS};
use crate::error::{Error, Result};
use crate::model::{ModelStore, ModelsExt};
use crate::query::Filter;

/// The set of Work fields that may be searched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchKeys(BTreeSet<String>);

impl SearchKeys {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// All genres, by name.
pub fn genres<S: ModelStore>(store: &S) -> Result<Vec<Genre>> {
    Ok(store.models::<Genre>().all()?)
}

/// The current searchable-field set.
pub fn search_keys<S: ModelStore>(store: &S) -> Result<SearchKeys> {
    let keys = store.models::<SearchKey>().all()?;
    Ok(SearchKeys::from_names(keys.into_iter().map(|k| k.key_name)))
}

/// Populate reference data. Existing entries are left untouched.
///
/// Every search key must name a searchable Work field.
pub fn seed<S: ModelStore>(store: &S, genres: &[String], keys: &[String]) -> Result<()> {
    if let Some(bad) = keys.iter().find(|k| !WORK_TEXT_FIELDS.contains(&k.as_str())) {
        return Err(Error::validation(format!("'{}' is not a work field", bad)));
    }

    let mut added = 0;
    for name in genres.iter().map(|g| g.trim()).filter(|g| !g.is_empty()) {
        let genre = Genre {
            genre_name: name.to_string(),
        };
        if store
            .models::<Genre>()
            .insert_if_absent(&Filter::eq("genre_name", name), &genre)?
        {
            added += 1;
        }
    }
    for name in keys {
        let key = SearchKey {
            key_name: name.clone(),
        };
        if store
            .models::<SearchKey>()
            .insert_if_absent(&Filter::eq("key_name", name.as_str()), &key)?
        {
            added += 1;
        }
    }

    info!(added, "reference data seeded");
    Ok(())
}
