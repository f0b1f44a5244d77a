use contracts::system::visitor::{
    get_then_set, KeyValueStorage, MemoryStorage, StorageError, VisitorIdStore,
};
use std::rc::Rc;
use web_sys::window;

thread_local! {
    // One store per page so creation goes through a single lock.
    static VISITOR_STORE: Rc<VisitorIdStore<BrowserStorage>> =
        Rc::new(VisitorIdStore::new(BrowserStorage::detect()));
}

/// Shared visitor id store backed by the browser.
pub fn visitor_store() -> Rc<VisitorIdStore<BrowserStorage>> {
    VISITOR_STORE.with(Rc::clone)
}

/// localStorage, or an in-memory map for this page session when the browser
/// does not give us localStorage (disabled cookies, sandboxed iframe, ...).
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Session(MemoryStorage),
}

impl BrowserStorage {
    pub fn detect() -> Self {
        match window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => BrowserStorage::Local(storage),
            Some(Ok(None)) => {
                log::warn!("localStorage is not available, visitor id is kept for this session only");
                BrowserStorage::Session(MemoryStorage::new())
            }
            Some(Err(e)) => {
                log::warn!("localStorage access denied ({:?}), visitor id is kept for this session only", e);
                BrowserStorage::Session(MemoryStorage::new())
            }
            None => {
                log::warn!("no window, visitor id is kept for this session only");
                BrowserStorage::Session(MemoryStorage::new())
            }
        }
    }

    /// False when ids will not survive a reload.
    pub fn is_persistent(&self) -> bool {
        matches!(self, BrowserStorage::Local(_))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStorage::Local(storage) => {
                storage.get_item(key).map_err(|e| StorageError::Read {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
            }
            BrowserStorage::Session(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStorage::Local(storage) => {
                storage.set_item(key, value).map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
            }
            BrowserStorage::Session(memory) => memory.set(key, value),
        }
    }

    fn set_if_absent(&self, key: &str, value: &str) -> Result<String, StorageError> {
        match self {
            // localStorage has no compare-and-swap; other tabs can still race.
            BrowserStorage::Local(_) => get_then_set(self, key, value),
            BrowserStorage::Session(memory) => memory.set_if_absent(key, value),
        }
    }
}
