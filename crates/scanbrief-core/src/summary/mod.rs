pub mod grype;
pub mod secrets;
pub mod severity;
pub mod static_analysis;
pub mod trivy;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Upper bound on the detail rows kept per vulnerability scan.
pub const TOP_FINDINGS_LIMIT: usize = 10;

/// Normalized summary of one scanner's output.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ScanResult {
    pub total: usize,
    /// `None` for tools that never report a breakdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_severity: Option<SeverityCounts>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_findings: Vec<Finding>,
}

impl ScanResult {
    pub fn count_only(total: usize) -> Self {
        Self {
            total,
            by_severity: None,
            top_findings: Vec::new(),
        }
    }

    /// True when the result carries no findings of any kind.
    pub fn is_empty(&self) -> bool {
        self.total == 0
            && self.by_severity.as_ref().is_none_or(SeverityCounts::is_empty)
            && self.top_findings.is_empty()
    }
}

/// One row of the top-findings table.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Finding {
    pub severity: String,
    pub id: String,
    pub package: String,
    pub version: String,
    pub fix_versions: String,
}

/// Severity label counts, kept in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    entries: Vec<(String, usize)>,
}

impl SeverityCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, label: &str) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((label.to_string(), 1)),
        }
    }

    pub fn get(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `Critical=3, High=5`, in insertion order.
    pub fn display(&self) -> String {
        self.iter()
            .map(|(label, count)| format!("{}={}", label, count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<'a> FromIterator<&'a str> for SeverityCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = SeverityCounts::new();
        for label in iter {
            counts.increment(label);
        }
        counts
    }
}

impl Serialize for SeverityCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

/// The array under `key`, or an empty slice for any other shape.
pub(crate) fn array_field<'a>(value: Option<&'a Value>, key: &str) -> &'a [Value] {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// String at a nested object path, `None` if any hop is missing or mistyped.
pub(crate) fn str_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    path.iter()
        .try_fold(value, |current, key| current.get(*key))
        .and_then(Value::as_str)
}
