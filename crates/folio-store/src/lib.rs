//! Key-value persistence abstraction.
//!
//! The terminal core persists only its recall history, and only through the
//! [`KeyValueStore`] trait. Backends decide where the bytes live.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use folio_types::error::Result;

/// A string-keyed, string-valued persistent store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Whether `key` currently holds a value.
    fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}
