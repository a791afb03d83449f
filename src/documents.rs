//! Document types persisted by the site.

use serde::{Deserialize, Serialize};

use crate::model::{Model, ObjectId};

/// A registered account. The username doubles as the document id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password_hash: String,
}

impl Model for User {
    const COLLECTION: &'static str = "users";
    fn id(&self) -> &str {
        &self.username
    }
}

/// A piece of writing published by its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub id: ObjectId,
    pub author: String,
    pub title: String,
    pub genre: String,
    pub writing: String,
}

impl Model for Work {
    const COLLECTION: &'static str = "works";
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// The fields of a Work a user may search by. `id` is never searchable.
pub const WORK_TEXT_FIELDS: [&str; 4] = ["author", "title", "genre", "writing"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub genre_name: String,
}

impl Model for Genre {
    const COLLECTION: &'static str = "genres";
    fn id(&self) -> &str {
        &self.genre_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchKey {
    pub key_name: String,
}

impl Model for SearchKey {
    const COLLECTION: &'static str = "search_keys";
    fn id(&self) -> &str {
        &self.key_name
    }
}

/// A user's like of a work. Composite id: `{user}:{work_id}`; usernames never
/// contain `:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favourite {
    pub id: String,
    pub user: String,
    pub work_id: ObjectId,
}

impl Favourite {
    pub fn new(user: &str, work_id: &ObjectId) -> Self {
        Self {
            id: Self::key(user, work_id),
            user: user.to_string(),
            work_id: work_id.clone(),
        }
    }

    pub fn key(user: &str, work_id: &ObjectId) -> String {
        format!("{}:{}", user, work_id)
    }
}

impl Model for Favourite {
    const COLLECTION: &'static str = "favourites";
    fn id(&self) -> &str {
        &self.id
    }
}
