use super::{array_field, str_at, ScanResult, SeverityCounts};
use serde_json::Value;

const RESULTS_KEY: &str = "results";

/// Static-analysis tools that report a flat `results` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticTool {
    Semgrep,
    Bandit,
}

impl StaticTool {
    /// Object paths tried in order for a result's severity label.
    fn severity_paths(&self) -> &'static [&'static [&'static str]] {
        match self {
            // Semgrep CLI nests the severity under `extra`
            StaticTool::Semgrep => &[&["severity"], &["extra", "severity"]],
            StaticTool::Bandit => &[&["issue_severity"]],
        }
    }

    fn severity_of<'a>(&self, result: &'a Value) -> &'a str {
        self.severity_paths()
            .iter()
            .find_map(|path| str_at(result, path))
            .unwrap_or("")
    }
}

/// Count the entries of `results`. Any other shape counts as zero.
pub fn count_results(raw: Option<&Value>) -> ScanResult {
    ScanResult::count_only(array_field(raw, RESULTS_KEY).len())
}

/// Count the entries of `results` and group them by the tool's own
/// severity field. Unlabeled results land in the `""` bucket.
pub fn summarize(raw: Option<&Value>, tool: StaticTool) -> ScanResult {
    let results = array_field(raw, RESULTS_KEY);
    let by_severity: SeverityCounts = results.iter().map(|r| tool.severity_of(r)).collect();

    ScanResult {
        total: results.len(),
        by_severity: Some(by_severity),
        top_findings: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_results() {
        assert_eq!(count_results(None).total, 0);
        assert_eq!(count_results(Some(&json!({}))).total, 0);
        assert_eq!(count_results(Some(&json!({"results": null}))).total, 0);
        assert_eq!(count_results(Some(&json!([1, 2]))).total, 0);

        let result = count_results(Some(&json!({"results": [{}, {}, {}]})));
        assert_eq!(result.total, 3);
        assert!(result.by_severity.is_none());
    }

    #[test]
    fn test_bandit_breakdown() {
        let raw = json!({"results": [
            {"issue_severity": "LOW"},
            {"issue_severity": "HIGH"},
            {"issue_severity": "LOW"},
            {"test_id": "B101"},
        ]});
        let result = summarize(Some(&raw), StaticTool::Bandit);
        assert_eq!(result.total, 4);
        assert_eq!(result.by_severity.unwrap().display(), "LOW=2, HIGH=1, =1");
    }

    #[test]
    fn test_semgrep_reads_top_level_then_extra() {
        let raw = json!({"results": [
            {"check_id": "a", "extra": {"severity": "ERROR"}},
            {"check_id": "b", "severity": "WARNING"},
            {"check_id": "c", "extra": {"severity": "ERROR"}},
            {"check_id": "d", "extra": {}},
        ]});
        let by = summarize(Some(&raw), StaticTool::Semgrep).by_severity.unwrap();
        assert_eq!(by.get("ERROR"), 2);
        assert_eq!(by.get("WARNING"), 1);
        assert_eq!(by.get(""), 1);
    }

    #[test]
    fn test_bandit_ignores_semgrep_field() {
        let raw = json!({"results": [{"severity": "HIGH"}]});
        let by = summarize(Some(&raw), StaticTool::Bandit).by_severity.unwrap();
        assert_eq!(by.get(""), 1);
    }

    #[test]
    fn test_null_input_breakdown_is_empty() {
        let result = summarize(None, StaticTool::Semgrep);
        assert_eq!(result.total, 0);
        assert!(result.is_empty());
    }
}
