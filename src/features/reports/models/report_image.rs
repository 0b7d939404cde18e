use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Capture-time context recorded by the shell alongside each image.
///
/// Coordinates and the resolved address are absent when the location
/// permission was denied or the fix was unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub captured_at: DateTime<Utc>,
    pub device_model: String,
    pub os_version: String,
    pub address: Option<String>,
}

/// An image attached to a report, pixel data carried as base64.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportImage {
    pub id: Uuid,
    pub filename: String,
    /// Base64-encoded pixel payload.
    pub data: String,
    /// Source URI on the capturing device.
    pub uri: String,
    pub metadata: ImageMetadata,
}
