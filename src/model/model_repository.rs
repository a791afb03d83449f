//! ModelRepository - Typed accessor for model CRUD operations.

use std::marker::PhantomData;

use serde_json::{Map, Value};

use super::{Model, ModelError, ModelStore, Versioned};
use crate::query::Filter;

/// Typed repository wrapper for accessing models of a specific type.
pub struct ModelRepository<'a, S, M> {
    store: &'a S,
    _marker: PhantomData<M>,
}

impl<'a, S: ModelStore, M: Model> ModelRepository<'a, S, M> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Get a model by ID.
    pub fn get(&self, id: &str) -> Result<Option<M>, ModelError> {
        Ok(self.store.get_model::<M>(id)?.map(|v| v.data))
    }

    /// Insert a new model. Fails if it already exists.
    pub fn insert(&self, model: &M) -> Result<Versioned<M>, ModelError> {
        self.store.insert_model(model)
    }

    /// Insert unless a document matching `key` exists. Returns true if inserted.
    pub fn insert_if_absent(&self, key: &Filter, model: &M) -> Result<bool, ModelError> {
        self.store.insert_if_absent(key, model)
    }

    /// Partially update a model's fields.
    pub fn set(&self, id: &str, fields: &Map<String, Value>) -> Result<Option<M>, ModelError> {
        Ok(self.store.set_fields::<M>(id, fields)?.map(|v| v.data))
    }

    /// Delete a model by ID. Returns true if it existed.
    pub fn delete(&self, id: &str) -> Result<bool, ModelError> {
        self.store.delete_model::<M>(id)
    }

    /// Find models matching a filter.
    pub fn find(&self, filter: &Filter) -> Result<Vec<M>, ModelError> {
        Ok(self
            .store
            .find_models::<M>(filter)?
            .into_iter()
            .map(|v| v.data)
            .collect())
    }

    /// Every model in the collection.
    pub fn all(&self) -> Result<Vec<M>, ModelError> {
        self.find(&Filter::All)
    }
}

/// Extension trait for typed model access on any ModelStore.
pub trait ModelsExt: ModelStore + Sized {
    /// Get a typed model repository.
    fn models<M: Model>(&self) -> ModelRepository<'_, Self, M> {
        ModelRepository::new(self)
    }
}

impl<S: ModelStore> ModelsExt for S {}
