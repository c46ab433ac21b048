use super::severity::{self, UNKNOWN};
use super::{array_field, str_at, Finding, ScanResult, SeverityCounts, TOP_FINDINGS_LIMIT};
use serde_json::Value;

const NOT_FIXED: &str = "not-fixed";

/// Summarize a Grype JSON report (`{"matches": [...]}`).
///
/// Every entry of `matches` counts toward the total, whatever its content.
/// The top findings are ordered by severity, then fix availability: within
/// a severity tier, matches with a fix (any state other than `not-fixed`,
/// including no state at all) come first. The sort is stable.
pub fn summarize(raw: Option<&Value>) -> ScanResult {
    let matches = array_field(raw, "matches");

    let by_severity: SeverityCounts = matches.iter().map(severity_of).collect();

    let mut ranked: Vec<&Value> = matches.iter().collect();
    ranked.sort_by_key(|m| (severity::rank(severity_of(m)), is_not_fixed(m)));

    let top_findings = ranked
        .into_iter()
        .take(TOP_FINDINGS_LIMIT)
        .map(to_finding)
        .collect();

    ScanResult {
        total: matches.len(),
        by_severity: Some(by_severity),
        top_findings,
    }
}

fn severity_of(m: &Value) -> &str {
    str_at(m, &["vulnerability", "severity"]).unwrap_or(UNKNOWN)
}

fn is_not_fixed(m: &Value) -> bool {
    str_at(m, &["vulnerability", "fix", "state"]) == Some(NOT_FIXED)
}

fn to_finding(m: &Value) -> Finding {
    let text = |path: &[&str]| str_at(m, path).unwrap_or_default().to_string();

    let fix_versions = m
        .get("vulnerability")
        .and_then(|v| v.get("fix"))
        .and_then(|f| f.get("versions"))
        .and_then(Value::as_array)
        .map(|versions| {
            versions
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    Finding {
        severity: severity_of(m).to_string(),
        id: text(&["vulnerability", "id"]),
        package: text(&["artifact", "name"]),
        version: text(&["artifact", "version"]),
        fix_versions,
    }
}
