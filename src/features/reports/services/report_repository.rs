use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::Report;
use crate::modules::storage::SecureStore;
use crate::shared::constants::REPORTS_STORAGE_KEY;

/// Persistence boundary for the report collection.
///
/// The whole collection is (de)serialized on every operation; the in-memory
/// list is the session's source of truth between flushes. There is no
/// incremental append at the storage layer.
pub struct ReportRepository {
    store: Arc<dyn SecureStore>,
}

impl ReportRepository {
    pub fn new(store: Arc<dyn SecureStore>) -> Self {
        Self { store }
    }

    /// Persisted collection; empty when nothing was ever saved.
    pub async fn load(&self) -> Result<Vec<Report>> {
        let raw = match self.store.get(REPORTS_STORAGE_KEY).await? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Stored report collection is not well-formed: {}", e);
            AppError::StorageRead(format!("report collection: {}", e))
        })
    }

    /// Serialize and write the full collection, replacing prior content.
    pub async fn save(&self, reports: &[Report]) -> Result<()> {
        let raw = serde_json::to_string(reports)?;
        self.store.set(REPORTS_STORAGE_KEY, &raw).await
    }
}
