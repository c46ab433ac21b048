use crate::error::ReportError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `html` to `dir/file_name`, creating `dir` if needed and replacing
/// any previous report. Returns the path written.
pub fn write_report(dir: &Path, file_name: &str, html: &str) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    std::fs::write(&path, html).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), bytes = html.len(), "report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");

        let path = write_report(&dir, "report.html", "<p>hi</p>").unwrap();
        assert_eq!(path, dir.join("report.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_overwrites_previous_report() {
        let tmp = tempfile::tempdir().unwrap();
        write_report(tmp.path(), "report.html", "first, and longer").unwrap();
        let path = write_report(tmp.path(), "report.html", "second").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_dir_blocked_by_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("taken");
        std::fs::write(&blocker, "").unwrap();

        let err = write_report(&blocker, "report.html", "x").unwrap_err();
        assert!(matches!(err, ReportError::CreateDir { .. }));
        assert!(err.to_string().contains("taken"));
    }

    #[test]
    fn test_utf8_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_report(tmp.path(), "r.html", "— ✓").unwrap();
        assert_eq!(std::fs::read(path).unwrap(), "— ✓".as_bytes());
    }
}
