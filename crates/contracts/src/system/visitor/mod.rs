//! Anonymous visitor identifier.
//!
//! A short random id is created lazily on first access and persisted in the
//! client's key-value storage, so the same storage origin keeps sending the
//! same id to the blog API.

pub mod id;
pub mod storage;
pub mod store;

pub use id::{VisitorId, VISITOR_ID_ALPHABET, VISITOR_ID_LEN};
pub use storage::{get_present, get_then_set, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{VisitorIdStore, VISITOR_ID_KEY};
