use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Mutex, MutexGuard};

use super::id::VisitorId;
use super::storage::{get_present, KeyValueStorage, StorageError};

/// Storage key the visitor id lives under.
pub const VISITOR_ID_KEY: &str = "UUID";

/// Lazily creates and persists the visitor id.
///
/// Every call reads the backing storage, so if the storage is cleared from
/// outside a new id is created on the next access. An empty stored value
/// counts as no id. Creation happens under the store's own lock: concurrent
/// first calls through one store end up with the same id. Separate stores
/// sharing a backend only converge when the backend overrides
/// [`KeyValueStorage::set_if_absent`] atomically.
pub struct VisitorIdStore<S> {
    storage: S,
    key: String,
    rng: Mutex<StdRng>,
}

impl<S: KeyValueStorage> VisitorIdStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_rng(storage, StdRng::from_entropy())
    }

    pub fn with_rng(storage: S, rng: StdRng) -> Self {
        Self {
            storage,
            key: VISITOR_ID_KEY.to_string(),
            rng: Mutex::new(rng),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the stored id without creating one.
    pub fn current(&self) -> Result<Option<VisitorId>, StorageError> {
        let stored = get_present(&self.storage, &self.key)?.map(VisitorId::from_stored);
        if let Some(id) = &stored {
            if !id.is_canonical() {
                log::warn!("visitor id under '{}' is not canonical: {:?}", self.key, id.as_str());
            }
        }
        Ok(stored)
    }

    /// Returns the stored visitor id, creating and persisting one first if
    /// the key is empty.
    pub fn get_or_create(&self) -> Result<VisitorId, StorageError> {
        if let Some(id) = self.current()? {
            log::debug!("visitor id read from '{}'", self.key);
            return Ok(id);
        }

        let mut rng = self.lock_rng();
        // Another caller may have finished creation while we waited.
        if let Some(id) = self.current()? {
            return Ok(id);
        }

        let candidate = VisitorId::generate(&mut *rng);
        let stored = self.storage.set_if_absent(&self.key, candidate.as_str())?;
        if stored == candidate.as_str() {
            log::info!("created visitor id under '{}'", self.key);
        } else {
            log::debug!("visitor id under '{}' was written concurrently", self.key);
        }
        Ok(VisitorId::from_stored(stored))
    }

    fn lock_rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
