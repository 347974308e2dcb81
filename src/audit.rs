//! Rule-based accessibility audit.
//!
//! The auditor runs a battery of independent [`RuleCheck`]s, each producing
//! zero or more issues, and folds them into a weighted 0–100 score with a
//! one-line summary. The built-in battery carries fixed, curated findings
//! for the app's known weak spots; each check is a trait object so it can be
//! swapped for a real static or DOM analyzer without touching the scoring.

use serde::{Deserialize, Serialize};

/// Which rule family an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Contrast,
    Focus,
    Labels,
    Structure,
    Navigation,
}

/// How much an issue hurts the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IssueSeverity {
    /// Points deducted from a perfect score per issue.
    pub const fn penalty(self) -> u32 {
        match self {
            Self::Low => 5,
            Self::Medium => 10,
            Self::High => 15,
            Self::Critical => 25,
        }
    }
}

/// A single finding produced by one rule check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityIssue {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub description: String,
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

/// The audit outcome: every finding, the weighted score, and a summary line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityTestResult {
    pub issues: Vec<AccessibilityIssue>,
    /// 0–100, higher is better.
    pub score: u8,
    pub summary: String,
}

/// One accessibility rule. Checks are synchronous and independent; a check
/// reporting no issues returns an empty vec.
pub trait RuleCheck: Send + Sync {
    fn run(&self) -> Vec<AccessibilityIssue>;
}

/// Runs a battery of rule checks and scores the findings.
pub struct AccessibilityTester {
    checks: Vec<Box<dyn RuleCheck>>,
}

impl Default for AccessibilityTester {
    fn default() -> Self {
        Self {
            checks: builtin_battery(),
        }
    }
}

impl AccessibilityTester {
    /// The built-in battery: contrast, focus, labels, structure, navigation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the battery entirely, e.g. with real analyzers.
    pub fn with_checks(checks: Vec<Box<dyn RuleCheck>>) -> Self {
        Self { checks }
    }

    /// Run every check and fold the findings into a scored result. The same
    /// battery always yields the same result.
    pub fn run(&self) -> AccessibilityTestResult {
        let issues: Vec<AccessibilityIssue> =
            self.checks.iter().flat_map(|check| check.run()).collect();
        let score = score(&issues);
        tracing::debug!(issues = issues.len(), score, "accessibility audit complete");
        AccessibilityTestResult {
            score,
            summary: summary(score).to_string(),
            issues,
        }
    }
}

/// 100 minus the summed severity penalties, floored at 0.
pub fn score(issues: &[AccessibilityIssue]) -> u8 {
    let penalty: u32 = issues.iter().map(|issue| issue.severity.penalty()).sum();
    100u32.saturating_sub(penalty) as u8
}

/// Summary line for a score bracket; brackets include their lower bound.
pub fn summary(score: u8) -> &'static str {
    match score {
        90..=u8::MAX => "Excellent accessibility compliance with minor improvements needed.",
        75..=89 => "Good accessibility with some areas for improvement.",
        60..=74 => "Moderate accessibility issues that should be addressed.",
        _ => "Significant accessibility issues requiring immediate attention.",
    }
}

fn builtin_battery() -> Vec<Box<dyn RuleCheck>> {
    vec![
        Box::new(ContrastCheck),
        Box::new(FocusCheck),
        Box::new(LabelsCheck),
        Box::new(StructureCheck),
        Box::new(NavigationCheck),
    ]
}

/// Text/background contrast ratios.
pub struct ContrastCheck;

impl RuleCheck for ContrastCheck {
    fn run(&self) -> Vec<AccessibilityIssue> {
        vec![AccessibilityIssue {
            kind: IssueKind::Contrast,
            severity: IssueSeverity::Medium,
            description: "Text color may not have sufficient contrast against background"
                .to_string(),
            suggestion: "Ensure contrast ratio is at least 4.5:1 for normal text".to_string(),
            element: Some("Secondary text elements".to_string()),
        }]
    }
}

/// Visible focus indicators on interactive elements.
pub struct FocusCheck;

impl RuleCheck for FocusCheck {
    fn run(&self) -> Vec<AccessibilityIssue> {
        vec![AccessibilityIssue {
            kind: IssueKind::Focus,
            severity: IssueSeverity::High,
            description: "Focus indicators may not be visible enough".to_string(),
            suggestion: "Add clear focus indicators with sufficient contrast".to_string(),
            element: Some("Interactive elements".to_string()),
        }]
    }
}

/// Labels on form inputs.
pub struct LabelsCheck;

impl RuleCheck for LabelsCheck {
    fn run(&self) -> Vec<AccessibilityIssue> {
        vec![AccessibilityIssue {
            kind: IssueKind::Labels,
            severity: IssueSeverity::Medium,
            description: "Some form inputs may lack proper labels".to_string(),
            suggestion: "Ensure all inputs have associated labels or aria-label attributes"
                .to_string(),
            element: Some("Form inputs".to_string()),
        }]
    }
}

/// Heading hierarchy for screen readers.
pub struct StructureCheck;

impl RuleCheck for StructureCheck {
    fn run(&self) -> Vec<AccessibilityIssue> {
        vec![AccessibilityIssue {
            kind: IssueKind::Structure,
            severity: IssueSeverity::Low,
            description: "Heading hierarchy could be improved".to_string(),
            suggestion:
                "Use proper heading hierarchy (h1, h2, h3) for better screen reader navigation"
                    .to_string(),
            element: Some("Page headings".to_string()),
        }]
    }
}

/// Keyboard reachability of custom components.
pub struct NavigationCheck;

impl RuleCheck for NavigationCheck {
    fn run(&self) -> Vec<AccessibilityIssue> {
        vec![AccessibilityIssue {
            kind: IssueKind::Navigation,
            severity: IssueSeverity::Medium,
            description: "Some interactive elements may not be keyboard accessible".to_string(),
            suggestion: "Ensure all interactive elements are keyboard accessible".to_string(),
            element: Some("Custom components".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: IssueSeverity) -> AccessibilityIssue {
        AccessibilityIssue {
            kind: IssueKind::Contrast,
            severity,
            description: "d".to_string(),
            suggestion: "s".to_string(),
            element: None,
        }
    }

    #[test]
    fn penalties_follow_the_severity_ladder() {
        assert_eq!(score(&[]), 100);
        assert_eq!(score(&[issue(IssueSeverity::Low)]), 95);
        assert_eq!(score(&[issue(IssueSeverity::Medium)]), 90);
        assert_eq!(score(&[issue(IssueSeverity::High)]), 85);
        assert_eq!(score(&[issue(IssueSeverity::Critical)]), 75);
    }

    #[test]
    fn score_floors_at_zero() {
        let issues: Vec<_> = (0..10).map(|_| issue(IssueSeverity::Critical)).collect();
        assert_eq!(score(&issues), 0);
    }

    #[test]
    fn summary_brackets_include_their_lower_bound() {
        assert_eq!(
            summary(90),
            "Excellent accessibility compliance with minor improvements needed."
        );
        assert_eq!(summary(100), summary(95));
        assert_eq!(
            summary(75),
            "Good accessibility with some areas for improvement."
        );
        assert_eq!(summary(89), summary(75));
        assert_eq!(
            summary(60),
            "Moderate accessibility issues that should be addressed."
        );
        assert_eq!(
            summary(59),
            "Significant accessibility issues requiring immediate attention."
        );
        assert_eq!(summary(0), summary(59));
    }

    #[test]
    fn builtin_battery_is_deterministic() {
        let tester = AccessibilityTester::new();
        let first = tester.run();
        let second = tester.run();
        assert_eq!(first, second);
        assert_eq!(first.issues.len(), 5);
        // medium + high + medium + low + medium = 50 points of penalty
        assert_eq!(first.score, 50);
        assert_eq!(
            first.summary,
            "Significant accessibility issues requiring immediate attention."
        );
    }

    #[test]
    fn checks_are_swappable() {
        struct Clean;
        impl RuleCheck for Clean {
            fn run(&self) -> Vec<AccessibilityIssue> {
                Vec::new()
            }
        }

        let result = AccessibilityTester::with_checks(vec![Box::new(Clean)]).run();
        assert!(result.issues.is_empty());
        assert_eq!(result.score, 100);
        assert_eq!(
            result.summary,
            "Excellent accessibility compliance with minor improvements needed."
        );
    }

    #[test]
    fn every_builtin_kind_is_represented() {
        let result = AccessibilityTester::new().run();
        for kind in [
            IssueKind::Contrast,
            IssueKind::Focus,
            IssueKind::Labels,
            IssueKind::Structure,
            IssueKind::Navigation,
        ] {
            assert!(result.issues.iter().any(|issue| issue.kind == kind));
        }
    }
}
