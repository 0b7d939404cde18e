use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::features::users::models::ContactPreference;

use super::{ReportImage, ReportLocation};

/// Report status as assigned by the municipal review pipeline.
///
/// Clients only ever create `Pending` reports; every other value would arrive
/// from an external authority that is not modeled here. There is no
/// client-side transition API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Reviewing,
    InProgress,
    Resolved,
    Rejected,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::Reviewing => write!(f, "reviewing"),
            ReportStatus::InProgress => write!(f, "in_progress"),
            ReportStatus::Resolved => write!(f, "resolved"),
            ReportStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Issue category picked on the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    Infrastructure,
    Environment,
    Security,
    Traffic,
    Waste,
    Other,
}

impl ReportCategory {
    /// Every category, in form display order.
    pub const ALL: [ReportCategory; 6] = [
        ReportCategory::Infrastructure,
        ReportCategory::Environment,
        ReportCategory::Security,
        ReportCategory::Traffic,
        ReportCategory::Waste,
        ReportCategory::Other,
    ];
}

impl std::fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportCategory::Infrastructure => write!(f, "infrastructure"),
            ReportCategory::Environment => write!(f, "environment"),
            ReportCategory::Security => write!(f, "security"),
            ReportCategory::Traffic => write!(f, "traffic"),
            ReportCategory::Waste => write!(f, "waste"),
            ReportCategory::Other => write!(f, "other"),
        }
    }
}

/// Submitter identity captured at submission time.
///
/// A denormalized copy; later profile edits do not rewrite old reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub name: String,
    pub surname: String,
    pub contact_preference: ContactPreference,
}

/// A single citizen submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub query: String,
    pub category: ReportCategory,
    /// Free-text explanation, present only when `category` is `Other`.
    pub category_detail: Option<String>,
    pub status: ReportStatus,
    pub images: Vec<ReportImage>,
    pub location: Option<ReportLocation>,
    pub user_info: UserSnapshot,
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at`; no mutation path refreshes it.
    pub updated_at: DateTime<Utc>,
}
