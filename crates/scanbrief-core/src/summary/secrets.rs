use super::ScanResult;
use serde_json::Value;

/// Summarize Gitleaks output. Newer releases write a bare array of findings;
/// older ones wrap it as `{"leaks": [...]}`. Any other shape is zero.
pub fn summarize(raw: Option<&Value>) -> ScanResult {
    let total = match raw {
        Some(Value::Array(findings)) => findings.len(),
        Some(Value::Object(obj)) => obj
            .get("leaks")
            .and_then(Value::as_array)
            .map_or(0, Vec::len),
        _ => 0,
    };
    ScanResult::count_only(total)
}
