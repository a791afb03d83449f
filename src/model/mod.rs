//! Models - Document-store boundary for every persisted collection.
//!
//! Models are typed documents stored by collection. The store exposes
//! find-by-filter, get-by-id, insert, `$set`-style partial update, delete,
//! and an atomic insert-if-absent keyed by a filter.
//!
//! ## Example
//!
//! ```ignore
//! use quill::model::{InMemoryModelStore, ModelsExt};
//! use quill::query::Filter;
//!
//! let store = InMemoryModelStore::new();
//! store.models::<Work>().insert(&work)?;
//! let poems = store.models::<Work>().find(&Filter::eq("genre", "poetry"))?;
//! ```

mod in_memory;
mod model_repository;
mod object_id;
mod store;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Trait for types that can be stored as models.
pub trait Model: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this model type (e.g., "works", "favourites").
    /// Maps to a table in SQL, a collection in MongoDB, a key prefix in KV stores, etc.
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this model instance.
    fn id(&self) -> &str;
}

/// A versioned wrapper around model data.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    pub data: T,
    pub version: u64,
}

/// Error type for model store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A document with this id already exists.
    #[error("model already exists: {collection}:{id}")]
    Conflict { collection: String, id: String },
    /// Serialization/deserialization error.
    #[error("model serialization error: {0}")]
    Serde(String),
    /// Storage-level error (unreachable, poisoned, timed out).
    #[error("model storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serde(err.to_string())
    }
}

pub use in_memory::InMemoryModelStore;
pub use model_repository::{ModelRepository, ModelsExt};
pub use object_id::{ObjectId, ObjectIdError};
pub use store::ModelStore;
