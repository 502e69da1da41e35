//! # Cart Storage Port
//!
//! The local persistent key-value collaborator mirroring the in-memory
//! cart.
//!
//! ## Contract
//! - `get` / `set` are synchronous and non-suspending; the store calls
//!   them inline while holding the cart lock
//! - One fixed key identifies the cart blob; the value is an opaque string
//!   (the store writes serde_json)
//! - `set` replaces the whole value; there are no partial updates

mod file;
mod memory;

pub use file::FileCartStorage;
pub use memory::MemoryCartStorage;

use crate::error::StorageResult;

/// Durable string-keyed storage for the cart blob.
pub trait CartStorage: Send + Sync {
    /// Reads the value under `key`, or `None` if the key was never set.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
