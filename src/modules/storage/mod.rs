//! Secure on-device key-value storage boundary.
//!
//! The platform shell provides the real secure store (Keychain on iOS,
//! Keystore-backed storage on Android). This module defines the contract the
//! repositories program against, plus two backends of its own: a file-per-key
//! store for desktop and integration-test environments, and an in-memory
//! store for unit tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::core::error::Result;

/// Contract with the platform secure store.
///
/// Writes are atomic by contract: a failed `set` leaves the previous value
/// under the key intact.
#[async_trait]
pub trait SecureStore: Send + Sync {
    /// Value stored under `key`, `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
