use super::ScanResult;
use serde_json::Value;

const MISCONFIGURATIONS: &str = "Misconfigurations";

/// Summarize a Trivy config scan.
///
/// Accepted shapes, first match wins:
/// - `{"Results": [{"Misconfigurations": [...]}, ...]}` sums every list
/// - `{"Misconfigurations": [...]}`
/// - `{"Count": n}`
///
/// Trivy writes `"Misconfigurations": null` for clean targets, which counts
/// as zero.
pub fn summarize(raw: Option<&Value>) -> ScanResult {
    let Some(obj) = raw.and_then(Value::as_object) else {
        return ScanResult::count_only(0);
    };

    let total = if let Some(results) = obj.get("Results").and_then(Value::as_array) {
        results.iter().map(misconfiguration_count).sum()
    } else if let Some(list) = obj.get(MISCONFIGURATIONS).and_then(Value::as_array) {
        list.len()
    } else {
        obj.get("Count")
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0)
    };

    ScanResult::count_only(total)
}

fn misconfiguration_count(result: &Value) -> usize {
    result
        .get(MISCONFIGURATIONS)
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}
