use crate::config::ReportConfig;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Raw scanner outputs for one run. `None` means the file was missing or
/// could not be parsed.
#[derive(Debug, Clone, Default)]
pub struct RawArtifacts {
    pub grype_repo: Option<Value>,
    pub grype_venv: Option<Value>,
    pub semgrep: Option<Value>,
    pub bandit: Option<Value>,
    pub gitleaks: Option<Value>,
    pub trivy_config: Option<Value>,
}

/// Read and parse a JSON file. Any I/O or parse failure yields `None`.
pub fn load_json(path: &Path) -> Option<Value> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "artifact not found, skipping");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read artifact");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => {
            debug!(path = %path.display(), bytes = content.len(), "loaded artifact");
            Some(value)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "artifact is not valid JSON");
            None
        }
    }
}

/// Load every scanner output named in the configuration.
pub fn load_artifacts(config: &ReportConfig) -> RawArtifacts {
    let load = |name: &str| load_json(&config.input_path(name));
    let inputs = &config.inputs;

    RawArtifacts {
        grype_repo: load(&inputs.grype_repo),
        grype_venv: load(&inputs.grype_venv),
        semgrep: load(&inputs.semgrep),
        bandit: load(&inputs.bandit),
        gitleaks: load(&inputs.gitleaks),
        trivy_config: load(&inputs.trivy_config),
    }
}
