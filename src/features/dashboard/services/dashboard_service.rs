use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;

use crate::features::dashboard::dtos::ReportStatistics;
use crate::features::reports::models::{Report, ReportCategory, ReportStatus};

/// Derives the statistics tab's read-only views.
///
/// Pure functions over the current collection; never mutates it.
pub struct DashboardService;

impl DashboardService {
    /// Fold the collection into the aggregate view.
    pub fn summarize(reports: &[Report]) -> ReportStatistics {
        let mut category_breakdown: BTreeMap<ReportCategory, usize> =
            ReportCategory::ALL.iter().map(|c| (*c, 0)).collect();
        let mut monthly_reports: HashMap<String, usize> = HashMap::new();
        let mut resolved_reports = 0;

        for report in reports {
            if report.status == ReportStatus::Resolved {
                resolved_reports += 1;
            }

            *category_breakdown.entry(report.category).or_insert(0) += 1;

            let label = format!(
                "{}/{}",
                report.created_at.month(),
                report.created_at.year()
            );
            *monthly_reports.entry(label).or_insert(0) += 1;
        }

        ReportStatistics {
            total_reports: reports.len(),
            resolved_reports,
            pending_reports: reports.len() - resolved_reports,
            category_breakdown,
            monthly_reports,
        }
    }

    /// Share of `count` in `total` as a whole percentage, 0 for an empty
    /// collection. Computed at render time, never stored.
    pub fn percentage(count: usize, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        (count as f64 * 100.0 / total as f64).round() as u32
    }
}
