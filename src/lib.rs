//! Platform-independent core of the Bildirim municipal issue-reporting app.
//!
//! The mobile shell owns every device API (camera, gallery, GPS, reverse
//! geocoding, map rendering and the secure-store primitive) and embeds this
//! crate for everything else: the durable report collection, the single
//! per-device profile and its session gate, submission validation and payload
//! construction, and the statistics shown on the dashboard tab.
//!
//! There is no server integration yet; a submission is persisted locally and
//! the payload a future backend would receive is logged at info level.

pub mod app;
pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

pub use crate::app::App;
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use crate::modules::storage::{FileStore, MemoryStore, SecureStore};
