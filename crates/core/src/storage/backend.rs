use crate::errors::CoreError;

use super::file::FileStore;
use super::memory::MemoryStore;
use super::traits::KeyValueStore;

/// Runtime-selected store, so configuration can pick memory or disk.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    Memory(MemoryStore),
    File(FileStore),
}

impl KeyValueStore for StoreBackend {
    fn name(&self) -> &str {
        match self {
            StoreBackend::Memory(s) => s.name(),
            StoreBackend::File(s) => s.name(),
        }
    }

    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        match self {
            StoreBackend::Memory(s) => s.get(key),
            StoreBackend::File(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        match self {
            StoreBackend::Memory(s) => s.set(key, value),
            StoreBackend::File(s) => s.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        match self {
            StoreBackend::Memory(s) => s.remove(key),
            StoreBackend::File(s) => s.remove(key),
        }
    }
}
