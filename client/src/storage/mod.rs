//! # Local Key-Value Storage
//!
//! Durable string-keyed storage that outlives the process, the way browser
//! local storage outlives a page. The session store keeps its two keys here.
//!
//! ```text
//! storage/
//! ├── mod.rs     - KeyValueStore trait and StorageError
//! ├── file.rs    - JSON object file, replaced atomically on every write
//! └── memory.rs  - In-process map for tests and ephemeral runs
//! ```
//!
//! Multi-key writes and removals are atomic: a reader never observes `user`
//! updated without `balance`.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Backing store failure.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The backing medium exists but is not a valid key-value document.
    #[error("storage is corrupt: {0}")]
    Corrupt(String),
}

/// String key-value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write all pairs as one unit.
    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StorageError>;

    /// Remove all keys as one unit. Absent keys are ignored.
    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError>;

    fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.set_many(&[(key, value)])
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove_many(&[key])
    }
}
