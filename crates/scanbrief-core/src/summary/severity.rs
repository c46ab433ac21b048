/// Label used when a vulnerability carries no severity.
pub const UNKNOWN: &str = "Unknown";

/// Sort rank for a vulnerability severity label. Lower is more urgent;
/// labels outside the known scale sort after everything else.
pub fn rank(label: &str) -> u8 {
    match label {
        "Critical" => 0,
        "High" => 1,
        "Medium" => 2,
        "Low" => 3,
        "Negligible" => 4,
        "Unknown" => 5,
        _ => 9,
    }
}

/// CSS class suffix for a label. Anything outside `[A-Za-z0-9_-]` is dropped
/// so arbitrary scanner labels cannot break out of the attribute.
pub fn css_suffix(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
