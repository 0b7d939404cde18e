//! Explicitly owned application state.
//!
//! One object holds the store handle and every service; the shell constructs
//! it at launch and passes it by reference into its views. Nothing here is
//! process-global.

use std::sync::Arc;

use crate::core::config::Config;
use crate::features::auth::SessionService;
use crate::features::reports::services::{ReportRepository, ReportService};
use crate::features::users::services::{ProfileRepository, ProfileService};
use crate::modules::storage::{FileStore, SecureStore};

pub struct App {
    pub session: SessionService,
    pub profile: ProfileService,
    pub reports: ReportService,
}

impl App {
    /// Wire every service around one shared store handle.
    pub fn new(config: Config, store: Arc<dyn SecureStore>) -> Self {
        let profiles = Arc::new(ProfileRepository::new(store.clone()));
        let report_repo = Arc::new(ReportRepository::new(store));

        Self {
            session: SessionService::new(profiles.clone()),
            profile: ProfileService::new(profiles.clone()),
            reports: ReportService::new(report_repo, profiles, config),
        }
    }

    /// Convenience constructor backed by the file store in the configured
    /// data directory.
    pub fn with_file_store(config: Config) -> Self {
        let store = Arc::new(FileStore::new(config.storage.data_dir.clone()));
        Self::new(config, store)
    }
}
