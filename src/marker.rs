use std::fmt;

use serde::{Deserialize, Serialize};

/// Urgency classification of a leak report.
///
/// Wire values are lowercase. Anything unrecognized maps to [`Severity::Unknown`]
/// rather than failing, since reports arrive from clients we don't control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            "critical" => Self::Critical,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Lifecycle state of a leak report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    Pending,
    Assigned,
    InProgress,
    Resolved,
    Closed,
    #[serde(other)]
    Unknown,
}

impl ReportStatus {
    /// A settled report no longer needs attention; markers render it green
    /// regardless of severity.
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

impl From<&str> for ReportStatus {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "assigned" => Self::Assigned,
            "in-progress" => Self::InProgress,
            "resolved" => Self::Resolved,
            "closed" => Self::Closed,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Presentation color token for a map marker or status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Resolved,
    Danger,
    Warning,
    Info,
    Accent,
    Neutral,
}

impl MarkerColor {
    /// The product palette behind each token.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Resolved => "#10B981",
            Self::Danger => "#EF4444",
            Self::Warning => "#F59E0B",
            Self::Info => "#3B82F6",
            Self::Accent => "#8B5CF6",
            Self::Neutral => "#64748B",
        }
    }
}

/// Map a report's severity and status to its marker color.
///
/// Settled status wins over any severity; otherwise the color follows the
/// severity table, with unrecognized severities rendered neutral. Pure and
/// total: every input pair has exactly one color.
pub fn marker_color(severity: Severity, status: ReportStatus) -> MarkerColor {
    if status.is_settled() {
        return MarkerColor::Resolved;
    }
    match severity {
        Severity::Critical => MarkerColor::Danger,
        Severity::High => MarkerColor::Warning,
        Severity::Medium => MarkerColor::Info,
        Severity::Low => MarkerColor::Accent,
        Severity::Unknown => MarkerColor::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_status_wins_over_any_severity() {
        assert_eq!(
            marker_color(Severity::Critical, ReportStatus::Resolved),
            MarkerColor::Resolved
        );
        assert_eq!(
            marker_color(Severity::Low, ReportStatus::Closed),
            MarkerColor::Resolved
        );
        assert_eq!(
            marker_color(Severity::Unknown, ReportStatus::Resolved),
            MarkerColor::Resolved
        );
    }

    #[test]
    fn severity_table_for_open_reports() {
        let open = ReportStatus::Pending;
        assert_eq!(marker_color(Severity::Critical, open), MarkerColor::Danger);
        assert_eq!(marker_color(Severity::High, open), MarkerColor::Warning);
        assert_eq!(marker_color(Severity::Medium, open), MarkerColor::Info);
        assert_eq!(marker_color(Severity::Low, open), MarkerColor::Accent);
        assert_eq!(marker_color(Severity::Unknown, open), MarkerColor::Neutral);
    }

    #[test]
    fn open_statuses_do_not_change_the_color() {
        for status in [
            ReportStatus::Pending,
            ReportStatus::Assigned,
            ReportStatus::InProgress,
            ReportStatus::Unknown,
        ] {
            assert_eq!(marker_color(Severity::High, status), MarkerColor::Warning);
        }
    }

    #[test]
    fn free_form_text_parses_totally() {
        assert_eq!(Severity::from("critical"), Severity::Critical);
        assert_eq!(Severity::from("  HIGH  "), Severity::High);
        assert_eq!(Severity::from(""), Severity::Unknown);
        assert_eq!(Severity::from("catastrophic"), Severity::Unknown);

        assert_eq!(ReportStatus::from("in-progress"), ReportStatus::InProgress);
        assert_eq!(ReportStatus::from("Closed"), ReportStatus::Closed);
        assert_eq!(ReportStatus::from("archived"), ReportStatus::Unknown);
    }

    #[test]
    fn palette_matches_product_colors() {
        assert_eq!(MarkerColor::Resolved.hex(), "#10B981");
        assert_eq!(MarkerColor::Danger.hex(), "#EF4444");
        assert_eq!(MarkerColor::Warning.hex(), "#F59E0B");
        assert_eq!(MarkerColor::Info.hex(), "#3B82F6");
        assert_eq!(MarkerColor::Accent.hex(), "#8B5CF6");
        assert_eq!(MarkerColor::Neutral.hex(), "#64748B");
    }

    #[test]
    fn wire_format_round_trips() {
        let status: ReportStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, ReportStatus::InProgress);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"in-progress\"");

        // Unrecognized wire values degrade instead of failing the whole payload.
        let status: ReportStatus = serde_json::from_str("\"escalated\"").unwrap();
        assert_eq!(status, ReportStatus::Unknown);
    }
}
