use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::users::models::PersonalInfo;
use crate::modules::storage::SecureStore;
use crate::shared::constants::PROFILE_STORAGE_KEY;

/// Persistence boundary for the single personal-info record.
pub struct ProfileRepository {
    store: Arc<dyn SecureStore>,
}

impl ProfileRepository {
    pub fn new(store: Arc<dyn SecureStore>) -> Self {
        Self { store }
    }

    /// Stored profile, `None` when no one is logged in on this device.
    pub async fn load(&self) -> Result<Option<PersonalInfo>> {
        let raw = match self.store.get(PROFILE_STORAGE_KEY).await? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            tracing::error!("Stored profile record is not well-formed: {}", e);
            AppError::StorageRead(format!("profile record: {}", e))
        })
    }

    /// Serialize and write the profile, replacing any prior record.
    pub async fn save(&self, profile: &PersonalInfo) -> Result<()> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(PROFILE_STORAGE_KEY, &raw).await
    }

    pub async fn delete(&self) -> Result<()> {
        self.store.delete(PROFILE_STORAGE_KEY).await
    }
}
