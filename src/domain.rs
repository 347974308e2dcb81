//! Leak-report entities and the pure read-side helpers built on them.
//!
//! Reports are created and mutated elsewhere (the mobile clients and the
//! maintenance backend); this crate only consumes them: classifying markers,
//! bucketing statuses for the home-screen statistics, filtering the map view. Field names follow the wire format the clients already speak.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::marker::{marker_color, MarkerColor, ReportStatus, Severity};

/// Where a leak was reported. `address` is the reverse-geocoded label and is
/// `None` whenever the lookup failed or was denied; consumers render a blank
/// address rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A resident-submitted leak report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeakReport {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub location: GeoPoint,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl LeakReport {
    /// Marker color for this report on the map.
    pub fn marker_color(&self) -> MarkerColor {
        marker_color(self.severity, self.status)
    }
}

/// Home-screen counters: every report lands in exactly one bucket, except
/// unknown statuses, which count only toward the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    /// Assigned or in-progress.
    pub in_progress: usize,
    /// Resolved or closed.
    pub resolved: usize,
}

impl StatusCounts {
    pub fn tally(reports: &[LeakReport]) -> Self {
        let mut counts = Self {
            total: reports.len(),
            ..Self::default()
        };
        for report in reports {
            match report.status {
                ReportStatus::Pending => counts.pending += 1,
                ReportStatus::Assigned | ReportStatus::InProgress => counts.in_progress += 1,
                ReportStatus::Resolved | ReportStatus::Closed => counts.resolved += 1,
                ReportStatus::Unknown => {}
            }
        }
        counts
    }
}

/// Map-view filter; `None` on either axis means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub status: Option<ReportStatus>,
    pub severity: Option<Severity>,
}

impl ReportFilter {
    pub fn matches(&self, report: &LeakReport) -> bool {
        self.status.map_or(true, |status| report.status == status)
            && self
                .severity
                .map_or(true, |severity| report.severity == severity)
    }

    /// Borrow-filter a report list for rendering.
    pub fn apply<'a>(&self, reports: &'a [LeakReport]) -> Vec<&'a LeakReport> {
        reports.iter().filter(|report| self.matches(report)).collect()
    }
}
