use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::features::reports::models::ReportCategory;

/// Aggregate view over the citizen's report history.
///
/// Recomputed from the full collection on every change; the volume involved
/// is one person's history, not a shared dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStatistics {
    pub total_reports: usize,

    /// Reports with `Resolved` status.
    pub resolved_reports: usize,

    /// Everything not yet resolved. This bucket folds `Reviewing`,
    /// `InProgress` and `Rejected` together with literal `Pending`.
    pub pending_reports: usize,

    /// Count per category; every one of the six keys is always present.
    pub category_breakdown: BTreeMap<ReportCategory, usize>,

    /// Count per "month/year" creation label (1-indexed month, e.g. "3/2025").
    /// Unordered.
    pub monthly_reports: HashMap<String, usize>,
}
