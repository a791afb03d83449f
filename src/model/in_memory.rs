//! InMemoryModelStore - BTreeMap-backed document store for testing and development.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Map, Value};
use tracing::warn;

use super::{Model, ModelError, ModelStore, ObjectId, Versioned};
use crate::query::Filter;

/// Internal stored representation of a model.
struct StoredModel {
    bytes: Vec<u8>,
    version: u64,
}

type Storage = BTreeMap<String, StoredModel>;

/// In-memory model store backed by a BTreeMap.
///
/// Storage key is `"COLLECTION:id"`, so a collection scan walks ids in
/// ascending order. Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryModelStore {
    storage: Arc<RwLock<Storage>>,
    sequence: Arc<AtomicU64>,
}

impl Default for InMemoryModelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryModelStore {
    /// Create a new empty model store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(BTreeMap::new())),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    fn make_key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Storage>, ModelError> {
        self.storage
            .read()
            .map_err(|_| ModelError::Storage("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Storage>, ModelError> {
        self.storage
            .write()
            .map_err(|_| ModelError::Storage("lock poisoned".into()))
    }

    /// Decoded documents of one collection, paired with their versions.
    fn scan<'s>(
        storage: &'s Storage,
        collection: &str,
    ) -> impl Iterator<Item = (Value, u64)> + 's {
        let prefix = format!("{}:", collection);
        storage
            .range(prefix.clone()..)
            .take_while(move |(key, _)| key.starts_with(&prefix))
            .filter_map(|(key, stored)| match serde_json::from_slice::<Value>(&stored.bytes) {
                Ok(doc) => Some((doc, stored.version)),
                Err(e) => {
                    warn!(key = %key, error = %e, "skipping undecodable document");
                    None
                }
            })
    }
}

impl ModelStore for InMemoryModelStore {
    fn issue_id(&self) -> ObjectId {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or_default();
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        ObjectId::from_parts(seconds, sequence)
    }

    fn get_model<M: Model>(&self, id: &str) -> Result<Option<Versioned<M>>, ModelError> {
        let key = Self::make_key(M::COLLECTION, id);
        let storage = self.read()?;

        match storage.get(&key) {
            Some(stored) => {
                let data: M = serde_json::from_slice(&stored.bytes)?;
                Ok(Some(Versioned {
                    data,
                    version: stored.version,
                }))
            }
            None => Ok(None),
        }
    }

    fn insert_model<M: Model>(&self, model: &M) -> Result<Versioned<M>, ModelError> {
        let key = Self::make_key(M::COLLECTION, model.id());
        let bytes = serde_json::to_vec(model)?;

        let mut storage = self.write()?;

        if storage.contains_key(&key) {
            return Err(ModelError::Conflict {
                collection: M::COLLECTION.to_string(),
                id: model.id().to_string(),
            });
        }

        storage.insert(key, StoredModel { bytes, version: 1 });

        Ok(Versioned {
            data: model.clone(),
            version: 1,
        })
    }

    fn insert_if_absent<M: Model>(&self, key: &Filter, model: &M) -> Result<bool, ModelError> {
        let storage_key = Self::make_key(M::COLLECTION, model.id());
        let bytes = serde_json::to_vec(model)?;

        // Held across the check and the insert.
        let mut storage = self.write()?;

        let exists = Self::scan(&storage, M::COLLECTION).any(|(doc, _)| key.matches(&doc));
        if exists {
            return Ok(false);
        }
        if storage.contains_key(&storage_key) {
            return Err(ModelError::Conflict {
                collection: M::COLLECTION.to_string(),
                id: model.id().to_string(),
            });
        }

        storage.insert(storage_key, StoredModel { bytes, version: 1 });
        Ok(true)
    }

    fn set_fields<M: Model>(
        &self,
        id: &str,
        fields: &Map<String, Value>,
    ) -> Result<Option<Versioned<M>>, ModelError> {
        let key = Self::make_key(M::COLLECTION, id);
        let mut storage = self.write()?;

        let Some(stored) = storage.get_mut(&key) else {
            return Ok(None);
        };

        let mut doc: Value = serde_json::from_slice(&stored.bytes)?;
        let Some(object) = doc.as_object_mut() else {
            return Err(ModelError::Serde(format!("{} is not an object", key)));
        };
        for (field, value) in fields {
            object.insert(field.clone(), value.clone());
        }

        let data: M = serde_json::from_value(doc)?;
        if data.id() != id {
            return Err(ModelError::Serde(format!(
                "update would change the id of {}",
                key
            )));
        }

        stored.bytes = serde_json::to_vec(&data)?;
        stored.version += 1;

        Ok(Some(Versioned {
            data,
            version: stored.version,
        }))
    }

    fn delete_model<M: Model>(&self, id: &str) -> Result<bool, ModelError> {
        let key = Self::make_key(M::COLLECTION, id);
        let mut storage = self.write()?;

        Ok(storage.remove(&key).is_some())
    }

    fn find_models<M: Model>(&self, filter: &Filter) -> Result<Vec<Versioned<M>>, ModelError> {
        let storage = self.read()?;

        Self::scan(&storage, M::COLLECTION)
            .filter(|(doc, _)| filter.matches(doc))
            .map(|(doc, version)| -> Result<Versioned<M>, ModelError> {
                Ok(Versioned {
                    data: serde_json::from_value(doc)?,
                    version,
                })
            })
            .collect()
    }
}
