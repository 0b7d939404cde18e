//! Statistics feature: read-only aggregate views over the report history.

pub mod dtos;
pub mod services;

pub use services::DashboardService;
