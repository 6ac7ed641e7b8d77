use crate::errors::CoreError;

/// A string-keyed store of UTF-8 JSON blobs.
///
/// Mirrors browser local storage: every key holds one whole document, and
/// writes replace it. Implementations take `&self` so several state containers
/// can share one backend through cloned handles.
pub trait KeyValueStore {
    /// Short name for logging (e.g., "memory", "file").
    fn name(&self) -> &str;

    /// Raw value under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}
