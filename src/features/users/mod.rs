//! Profile feature: the single per-device personal-info record.

pub mod dtos;
pub mod models;
pub mod services;

pub use services::{ProfileRepository, ProfileService};
