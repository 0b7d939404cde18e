//! Report submission and history feature.

pub mod dtos;
pub mod models;
pub mod services;

pub use services::{ReportRepository, ReportService};
