use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{Report, ReportCategory};
use crate::features::users::models::PersonalInfo;

/// Request DTO for a new submission, filled from the form by the shell.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewReportDto {
    #[validate(custom(
        function = "crate::shared::validation::not_blank",
        message = "Please enter your issue"
    ))]
    pub query: String,

    pub category: ReportCategory,

    /// Explanatory text for the catch-all category; ignored for the rest.
    pub category_detail: Option<String>,

    #[validate(nested)]
    pub images: Vec<NewImageDto>,

    pub location: Option<LocationDto>,
}

/// Image captured by the shell (camera or gallery), with its capture context.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewImageDto {
    #[validate(length(min = 1, message = "Image filename is required"))]
    pub filename: String,

    /// Base64-encoded pixel data; decoded and size-checked at submission.
    #[validate(length(min = 1, message = "Image payload is required"))]
    pub data: String,

    pub uri: String,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub captured_at: DateTime<Utc>,
    pub device_model: String,
    pub os_version: String,
    pub address: Option<String>,
}

/// Location picked on the map or resolved from the device fix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDto {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

// ============================================================================
// Submission payload
// ============================================================================

/// Wire shape a future server integration would receive.
///
/// Field names are the contract; today the payload is only serialized and
/// logged at submission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub uuid: Uuid,
    pub query: String,
    pub images: Vec<PayloadImage>,
    pub user_info: PayloadUserInfo,
    pub submission_metadata: SubmissionMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadImage {
    pub image_id: Uuid,
    pub filename: String,
    pub image_base64: String,
    pub metadata: PayloadImageMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadImageMetadata {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: DateTime<Utc>,
    pub device: String,
    pub os_version: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadUserInfo {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    pub manual_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionMetadata {
    pub submission_time: DateTime<Utc>,
    pub app_version: String,
    pub device_id: String,
}

impl SubmissionPayload {
    pub fn from_report(
        report: &Report,
        profile: &PersonalInfo,
        app_version: &str,
        device_id: &str,
    ) -> Self {
        Self {
            uuid: report.id,
            query: report.query.clone(),
            images: report
                .images
                .iter()
                .map(|img| PayloadImage {
                    image_id: img.id,
                    filename: img.filename.clone(),
                    image_base64: img.data.clone(),
                    metadata: PayloadImageMetadata {
                        latitude: img.metadata.latitude,
                        longitude: img.metadata.longitude,
                        timestamp: img.metadata.captured_at,
                        device: img.metadata.device_model.clone(),
                        os_version: img.metadata.os_version.clone(),
                        address: img.metadata.address.clone(),
                    },
                })
                .collect(),
            user_info: PayloadUserInfo {
                name: profile.name.clone(),
                surname: profile.surname.clone(),
                email: profile.email.clone().unwrap_or_default(),
                phone_number: profile.phone.clone().unwrap_or_default(),
                manual_address: report
                    .location
                    .as_ref()
                    .map(|loc| loc.address.clone())
                    .unwrap_or_default(),
            },
            submission_metadata: SubmissionMetadata {
                submission_time: report.created_at,
                app_version: app_version.to_string(),
                device_id: device_id.to_string(),
            },
        }
    }
}
