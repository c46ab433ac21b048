pub mod html;
pub mod writer;

use crate::summary::ScanResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything one report rendering needs. Built fresh for each run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportModel {
    pub title: String,
    /// ISO-8601 UTC, second precision
    pub generated: String,
    pub grype_repo: ScanResult,
    pub grype_venv: ScanResult,
    pub semgrep: ScanResult,
    pub bandit: ScanResult,
    pub gitleaks: ScanResult,
    pub trivy: ScanResult,
}

/// One tool's block in the rendered report.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    pub heading: &'static str,
    /// Heading of the top-findings table; `None` for tools without one
    pub detail_heading: Option<&'static str>,
    pub result: &'a ScanResult,
}

impl ReportModel {
    /// Sections in display order.
    pub fn sections(&self) -> [Section<'_>; 6] {
        [
            Section {
                heading: "Grype (repo)",
                detail_heading: Some("Top 10 repo vulnerabilities"),
                result: &self.grype_repo,
            },
            Section {
                heading: "Grype (venv)",
                detail_heading: Some("Top 10 venv vulnerabilities"),
                result: &self.grype_venv,
            },
            Section {
                heading: "Semgrep",
                detail_heading: None,
                result: &self.semgrep,
            },
            Section {
                heading: "Bandit",
                detail_heading: None,
                result: &self.bandit,
            },
            Section {
                heading: "Gitleaks",
                detail_heading: None,
                result: &self.gitleaks,
            },
            Section {
                heading: "Trivy (IaC/config)",
                detail_heading: None,
                result: &self.trivy,
            },
        ]
    }

    /// Sum of all tool totals.
    pub fn total_findings(&self) -> usize {
        self.sections().iter().map(|s| s.result.total).sum()
    }
}

/// Timestamp format used in the report header.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
