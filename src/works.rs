//! Works: publishing, reading, editing, and deleting.
//!
//! Only a work's author may edit or delete it.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::documents::Work;
use crate::error::{Error, Result};
use crate::model::{ModelStore, ModelsExt, ObjectId};
use crate::query::{normalize_username, Filter};

/// Form input for a new work.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewWork {
    pub title: String,
    #[serde(alias = "genre_name")]
    pub genre: String,
    pub writing: String,
}

/// Form input for an edit. Absent fields are left as they are.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkEdit {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub writing: Option<String>,
}

impl WorkEdit {
    fn into_fields(self) -> Map<String, Value> {
        [
            ("title", self.title),
            ("genre", self.genre),
            ("writing", self.writing),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field.to_string(), Value::String(v))))
        .collect()
    }
}

/// Store a new work by `author` under a freshly issued id.
pub fn publish<S: ModelStore>(store: &S, author: &str, new: NewWork) -> Result<Work> {
    let author = normalize_username(author);
    if author.is_empty() {
        return Err(Error::unauthorized("Please log in"));
    }
    let work = Work {
        id: store.issue_id(),
        author,
        title: new.title,
        genre: new.genre,
        writing: new.writing,
    };
    store.models::<Work>().insert(&work)?;

    info!(work = %work.id, author = %work.author, "work published");
    Ok(work)
}

/// Look a work up by an externally supplied id.
pub fn get<S: ModelStore>(store: &S, id: &str) -> Result<Work> {
    let id = ObjectId::parse(id)?;
    store
        .models::<Work>()
        .get(id.as_str())?
        .ok_or_else(|| Error::not_found("Work not found!"))
}

/// Apply `edit` to a work owned by `user`.
pub fn update<S: ModelStore>(store: &S, user: &str, id: &str, edit: WorkEdit) -> Result<Work> {
    let work = owned(store, user, id)?;
    let fields = edit.into_fields();
    if fields.is_empty() {
        return Ok(work);
    }

    let updated = store
        .models::<Work>()
        .set(work.id.as_str(), &fields)?
        .ok_or_else(|| Error::not_found("Work not found!"))?;

    info!(work = %updated.id, "work updated");
    Ok(updated)
}

/// Delete a work owned by `user`.
pub fn delete<S: ModelStore>(store: &S, user: &str, id: &str) -> Result<()> {
    let work = owned(store, user, id)?;
    if !store.models::<Work>().delete(work.id.as_str())? {
        return Err(Error::not_found("Work not found!"));
    }

    info!(work = %work.id, "work deleted");
    Ok(())
}

/// Works matching `filter`, newest first.
pub fn recent<S: ModelStore>(store: &S, filter: &Filter) -> Result<Vec<Work>> {
    let mut works = store.models::<Work>().find(filter)?;
    newest_first(&mut works);
    Ok(works)
}

fn newest_first(works: &mut [Work]) {
    works.sort_by(|a, b| b.id.cmp(&a.id));
}

fn owned<S: ModelStore>(store: &S, user: &str, id: &str) -> Result<Work> {
    let work = get(store, id)?;
    if work.author != normalize_username(user) {
        return Err(Error::unauthorized("Only the author can change this work"));
    }
    Ok(work)
}
