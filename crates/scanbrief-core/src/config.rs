use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Run configuration, optionally loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Where scanners drop their JSON and where the report is written
    pub artifact_dir: PathBuf,

    /// Report file name inside `artifact_dir`
    pub output_file: String,

    pub title: String,

    /// Group Semgrep/Bandit results by severity instead of counting only
    pub severity_breakdown: bool,

    pub inputs: InputFiles,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("run_artifacts"),
            output_file: "report.html".to_string(),
            title: "Security Scan Report".to_string(),
            severity_breakdown: true,
            inputs: InputFiles::default(),
        }
    }
}

/// Scanner output file names, relative to the artifact directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFiles {
    pub grype_repo: String,
    pub grype_venv: String,
    pub semgrep: String,
    pub bandit: String,
    pub gitleaks: String,
    pub trivy_config: String,
}

impl Default for InputFiles {
    fn default() -> Self {
        Self {
            grype_repo: "grype.json".to_string(),
            grype_venv: "grype.venv.json".to_string(),
            semgrep: "semgrep.json".to_string(),
            bandit: "bandit.json".to_string(),
            gitleaks: "gitleaks.json".to_string(),
            trivy_config: "trivy_config.json".to_string(),
        }
    }
}

impl ReportConfig {
    /// Config rooted at `artifact_dir` with every other setting defaulted.
    pub fn with_artifact_dir(artifact_dir: impl Into<PathBuf>) -> Self {
        Self {
            artifact_dir: artifact_dir.into(),
            ..Default::default()
        }
    }

    /// Full path of one input file.
    pub fn input_path(&self, file_name: &str) -> PathBuf {
        self.artifact_dir.join(file_name)
    }

    pub fn output_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.output_file)
    }
}

/// Load configuration from a TOML file. Keys left out take their defaults.
pub fn load_config(path: &Path) -> Result<ReportConfig, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|source| ReportError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(content: &str) -> Result<ReportConfig, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_pipeline_layout() {
        let config = ReportConfig::default();
        assert_eq!(config.artifact_dir, PathBuf::from("run_artifacts"));
        assert_eq!(config.output_path(), PathBuf::from("run_artifacts/report.html"));
        assert_eq!(
            config.input_path(&config.inputs.grype_venv),
            PathBuf::from("run_artifacts/grype.venv.json")
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = parse_config(
            r#"
artifact_dir = "out"
severity_breakdown = false

[inputs]
gitleaks = "leaks.json"
"#,
        )
        .unwrap();

        assert_eq!(config.artifact_dir, PathBuf::from("out"));
        assert!(!config.severity_breakdown);
        assert_eq!(config.output_file, "report.html");
        assert_eq!(config.inputs.gitleaks, "leaks.json");
        assert_eq!(config.inputs.semgrep, "semgrep.json");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(parse_config("").unwrap(), ReportConfig::default());
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(parse_config("artifact_dir = [").is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_config(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ReportError::ReadConfig { .. }));
    }
}
