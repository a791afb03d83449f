//! ModelStore - Abstract document storage for models.

use serde_json::{Map, Value};

use super::{Model, ModelError, ObjectId, Versioned};
use crate::query::Filter;

/// Abstract document storage for models.
///
/// Every operation is fallible. A missing document is a normal empty result
/// (`None`, `false`, empty `Vec`), never an error.
pub trait ModelStore: Send + Sync {
    /// Issue a fresh opaque id. Ids issued later sort after ids issued earlier.
    fn issue_id(&self) -> ObjectId;

    /// Get a model by ID. Returns None if not found.
    fn get_model<M: Model>(&self, id: &str) -> Result<Option<Versioned<M>>, ModelError>;

    /// Insert a new model. Fails with `Conflict` if the id already exists.
    fn insert_model<M: Model>(&self, model: &M) -> Result<Versioned<M>, ModelError>;

    /// Insert `model` only if no document in its collection matches `key`.
    ///
    /// The check and the insert happen as one atomic step. Returns `true`
    /// when the model was inserted.
    fn insert_if_absent<M: Model>(&self, key: &Filter, model: &M) -> Result<bool, ModelError>;

    /// Overwrite the given top-level fields of an existing document.
    ///
    /// Returns the updated model, or None if no document has this id.
    fn set_fields<M: Model>(
        &self,
        id: &str,
        fields: &Map<String, Value>,
    ) -> Result<Option<Versioned<M>>, ModelError>;

    /// Delete a model by ID. Returns true if it existed.
    fn delete_model<M: Model>(&self, id: &str) -> Result<bool, ModelError>;

    /// Find models matching a filter, in ascending id order.
    fn find_models<M: Model>(&self, filter: &Filter) -> Result<Vec<Versioned<M>>, ModelError>;
}
