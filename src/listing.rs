//! Listing pages: works plus favourite flags plus reference lists.
//!
//! Favourite flags come from one lookup of the viewer's favourite ids per
//! page, then a set-membership test per work.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{self, SearchKeys};
use crate::documents::{Genre, Work};
use crate::error::{Error, Result};
use crate::favourites;
use crate::model::{ModelStore, ObjectId};
use crate::query::{self, Filter};
use crate::works;

const TAB: &str = "    ";

/// One work, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkView {
    pub id: ObjectId,
    pub author: String,
    pub title: String,
    pub genre: String,
    pub lines: Vec<String>,
    pub favourited: bool,
}

/// Everything a listing page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub works: Vec<WorkView>,
    pub genres: Vec<String>,
    pub search_keys: Vec<String>,
}

/// Which works a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing<'a> {
    /// Every work.
    Home,
    /// Works in one genre.
    Genre(&'a str),
    /// Works whose `field` contains `term`.
    Search { field: &'a str, term: &'a str },
    /// The viewer's own works.
    Profile,
    /// Works the viewer has favourited.
    Favourites,
}

/// Expand tabs and split into lines.
pub fn format_writing(writing: &str) -> Vec<String> {
    writing
        .replace('\t', TAB)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Combine works, the viewer's favourite ids, and reference data.
pub fn assemble(
    works: Vec<Work>,
    favourite_ids: &HashSet<ObjectId>,
    genres: Vec<Genre>,
    search_keys: &SearchKeys,
) -> ViewModel {
    let works = works
        .into_iter()
        .map(|work| WorkView {
            favourited: favourite_ids.contains(&work.id),
            lines: format_writing(&work.writing),
            id: work.id,
            author: work.author,
            title: work.title,
            genre: work.genre,
        })
        .collect();

    ViewModel {
        works,
        genres: genres.into_iter().map(|g| g.genre_name).collect(),
        search_keys: search_keys.iter().map(str::to_string).collect(),
    }
}

/// Build a listing page for `viewer`.
pub fn page<S: ModelStore>(store: &S, viewer: Option<&str>, listing: Listing<'_>) -> Result<ViewModel> {
    let search_keys = catalog::search_keys(store)?;

    let works = match listing {
        Listing::Home => works::recent(store, &Filter::All)?,
        Listing::Genre(genre) => works::recent(store, &query::genre_filter(genre)?)?,
        Listing::Search { field, term } => {
            works::recent(store, &query::field_search(field, term, &search_keys)?)?
        }
        Listing::Profile => {
            let user = signed_in(viewer)?;
            works::recent(store, &query::author_filter(user)?)?
        }
        Listing::Favourites => favourites::list_favourites(store, signed_in(viewer)?)?,
    };

    let favourite_ids = favourites::favourite_ids(store, viewer)?;
    let genres = catalog::genres(store)?;
    Ok(assemble(works, &favourite_ids, genres, &search_keys))
}

fn signed_in(viewer: Option<&str>) -> Result<&str> {
    viewer
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::unauthorized("Please log in"))
}
