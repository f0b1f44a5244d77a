use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Ошибки хранилища ключ-значение
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read '{key}': {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Durable client-side key-value storage (browser localStorage or a stand-in).
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Writes `value` only when `key` is missing or holds an empty string and
    /// returns whatever is stored afterwards.
    ///
    /// Defaults to [`get_then_set`].
    fn set_if_absent(&self, key: &str, value: &str) -> Result<String, StorageError> {
        get_then_set(self, key, value)
    }
}

/// Reads `key`, treating an empty string as no value.
pub fn get_present<S: KeyValueStorage + ?Sized>(
    storage: &S,
    key: &str,
) -> Result<Option<String>, StorageError> {
    Ok(storage.get(key)?.filter(|v| !v.is_empty()))
}

/// Non-atomic `set_if_absent`: a read followed by a write. Two writers on
/// the same backend may both see the key as empty; the later write wins.
pub fn get_then_set<S: KeyValueStorage + ?Sized>(
    storage: &S,
    key: &str,
    value: &str,
) -> Result<String, StorageError> {
    if let Some(existing) = get_present(storage, key)? {
        return Ok(existing);
    }
    storage.set(key, value)?;
    Ok(value.to_string())
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn set_if_absent(&self, key: &str, value: &str) -> Result<String, StorageError> {
        (**self).set_if_absent(key, value)
    }
}

/// In-memory storage. Lives as long as the value itself, which makes it a
/// session-scoped substitute when the browser refuses localStorage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_if_absent(&self, key: &str, value: &str) -> Result<String, StorageError> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(existing) if !existing.is_empty() => Ok(existing.clone()),
            _ => {
                entries.insert(key.to_string(), value.to_string());
                Ok(value.to_string())
            }
        }
    }
}
