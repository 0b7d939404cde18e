use serde::{Deserialize, Serialize};

/// Coordinates plus the human-readable address shown on the report card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}
