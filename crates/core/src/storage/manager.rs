use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::CoreError;

use super::traits::KeyValueStore;

/// Typed JSON load/save on top of a [`KeyValueStore`].
///
/// Holds no defaults: an absent key comes back as `None` and the caller decides
/// what to seed.
#[derive(Debug, Clone)]
pub struct StorageManager<S> {
    store: S,
}

impl<S: KeyValueStore> StorageManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parse the JSON document under `key`.
    ///
    /// Flow: store → UTF-8 string → serde_json → T
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CoreError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&raw)
            .map_err(|e| CoreError::Deserialization(format!("Failed to parse '{key}': {e}")))?;
        Ok(Some(value))
    }

    /// Serialize `value` and write it as a full snapshot under `key`.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CoreError> {
        let json = serde_json::to_string(value)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize '{key}': {e}")))?;
        self.store.set(key, &json)?;
        debug!(store = self.store.name(), key, bytes = json.len(), "persisted snapshot");
        Ok(())
    }

    /// Load `key`, or write `seed()` under it and return that when the key is absent.
    pub fn load_or_seed<T, F>(&self, key: &str, seed: F) -> Result<T, CoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(value) = self.load(key)? {
            debug!(store = self.store.name(), key, "loaded persisted snapshot");
            return Ok(value);
        }
        let value = seed();
        self.save(key, &value)?;
        info!(store = self.store.name(), key, "seeded default data");
        Ok(value)
    }

    /// Remove every key in `keys`.
    pub fn clear(&self, keys: &[&str]) -> Result<(), CoreError> {
        for key in keys {
            self.store.remove(key)?;
        }
        Ok(())
    }
}
