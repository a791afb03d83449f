//! The site: a document store plus the password hashing primitive.

use std::sync::Arc;

use crate::accounts::{PasswordHasher, Sha256Hasher};
use crate::model::{InMemoryModelStore, ModelStore};

/// Everything a command handler needs besides its input and session.
#[derive(Clone)]
pub struct Site<S> {
    store: S,
    hasher: Arc<dyn PasswordHasher>,
}

impl Site<InMemoryModelStore> {
    /// A site over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryModelStore::new())
    }
}

impl<S: ModelStore> Site<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            hasher: Arc::new(Sha256Hasher),
        }
    }

    /// Swap the password hashing primitive.
    pub fn with_hasher(mut self, hasher: impl PasswordHasher + 'static) -> Self {
        self.hasher = Arc::new(hasher);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hasher(&self) -> &dyn PasswordHasher {
        self.hasher.as_ref()
    }
}
