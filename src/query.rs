//! Query building - pure-data filters over documents.
//!
//! A [`Filter`] is plain data: it serializes to JSON and is evaluated by the
//! store against each document. User input only ever lands in a `value` or
//! `term` slot, never in anything the store interprets as syntax.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::SearchKeys;
use crate::error::{Error, Result};

/// A predicate over a document's top-level fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Filter {
    /// Matches every document.
    All,
    /// Field equals value exactly.
    Eq { field: String, value: Value },
    /// String field contains `term`, ignoring case.
    Contains { field: String, term: String },
    /// Field equals one of `values`.
    In { field: String, values: Vec<Value> },
    /// Every inner filter matches.
    And { filters: Vec<Filter> },
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn contains(field: impl Into<String>, term: impl Into<String>) -> Self {
        Filter::Contains {
            field: field.into(),
            term: term.into(),
        }
    }

    pub fn any_of<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Filter::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::And {
            filters: filters.into_iter().collect(),
        }
    }

    /// Evaluate against a JSON document.
    pub fn matches(&self, doc: &Value) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq { field, value } => doc.get(field) == Some(value),
            Filter::Contains { field, term } => match doc.get(field).and_then(Value::as_str) {
                Some(text) => text.to_lowercase().contains(&term.to_lowercase()),
                None => false,
            },
            Filter::In { field, values } => match doc.get(field) {
                Some(found) => values.contains(found),
                None => false,
            },
            Filter::And { filters } => filters.iter().all(|f| f.matches(doc)),
        }
    }
}

/// Works whose genre equals `genre` exactly.
pub fn genre_filter(genre: &str) -> Result<Filter> {
    if genre.trim().is_empty() {
        return Err(Error::validation("Please choose a genre to filter by"));
    }
    Ok(Filter::eq("genre", genre))
}

/// Works whose `field` contains `term`, ignoring case.
///
/// `field` must be one of the current search keys.
pub fn field_search(field: &str, term: &str, keys: &SearchKeys) -> Result<Filter> {
    let field = field.trim();
    if field.is_empty() {
        return Err(Error::validation("Please choose a field to search"));
    }
    if !keys.contains(field) {
        return Err(Error::validation(format!("Cannot search by '{}'", field)));
    }
    if term.trim().is_empty() {
        return Err(Error::validation("Please enter something to search for"));
    }
    Ok(Filter::contains(field, term.trim()))
}

/// Works written by `username`.
pub fn author_filter(username: &str) -> Result<Filter> {
    let username = normalize_username(username);
    if username.is_empty() {
        return Err(Error::validation("Please enter an author"));
    }
    Ok(Filter::eq("author", username))
}

/// Usernames are stored trimmed and lowercased.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}
