mod document;
pub mod keys;
mod memory;
mod schema;
mod sqlite;

pub use document::{load_document, save_document};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;

/// Store defines the persistence interface: a flat map from fixed keys to
/// whole JSON documents. Writers always replace the full value of a key.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<bool>;
}
