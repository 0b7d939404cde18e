//! Session gate feature.
//!
//! Two states only: a persisted profile means logged in, its absence means
//! logged out. There is no credential beyond the record itself and no expiry.

pub mod dtos;
pub mod model;
pub mod service;

pub use model::SessionState;
pub use service::SessionService;
