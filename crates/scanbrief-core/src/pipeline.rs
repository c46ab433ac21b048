use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::loader::{load_artifacts, RawArtifacts};
use crate::report::html::generate_html_report;
use crate::report::writer::write_report;
use crate::report::{format_timestamp, ReportModel};
use crate::summary::static_analysis::{self, StaticTool};
use crate::summary::{grype, secrets, trivy, ScanResult};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// Summarize already-loaded artifacts. Pure: the same inputs always give
/// the same model.
pub fn summarize_artifacts(
    raw: &RawArtifacts,
    config: &ReportConfig,
    generated: String,
) -> ReportModel {
    let static_summary = |value: Option<&Value>, tool: StaticTool| {
        if config.severity_breakdown {
            static_analysis::summarize(value, tool)
        } else {
            static_analysis::count_results(value)
        }
    };

    ReportModel {
        title: config.title.clone(),
        generated,
        grype_repo: grype::summarize(raw.grype_repo.as_ref()),
        grype_venv: grype::summarize(raw.grype_venv.as_ref()),
        semgrep: static_summary(raw.semgrep.as_ref(), StaticTool::Semgrep),
        bandit: static_summary(raw.bandit.as_ref(), StaticTool::Bandit),
        gitleaks: secrets::summarize(raw.gitleaks.as_ref()),
        trivy: trivy::summarize(raw.trivy_config.as_ref()),
    }
}

/// Load and summarize every configured artifact, stamped with the current time.
pub fn build_report(config: &ReportConfig) -> ReportModel {
    let raw = load_artifacts(config);
    let model = summarize_artifacts(&raw, config, format_timestamp(chrono::Utc::now()));

    for section in model.sections() {
        log_section(section.heading, section.result);
    }
    model
}

/// Build, render and write the report. Only filesystem failures on the
/// output side are errors.
pub fn generate(config: &ReportConfig) -> Result<PathBuf, ReportError> {
    let model = build_report(config);
    let html = generate_html_report(&model);
    write_report(&config.artifact_dir, &config.output_file, &html)
}

fn log_section(heading: &str, result: &ScanResult) {
    debug!(
        tool = heading,
        total = result.total,
        top = result.top_findings.len(),
        "summarized"
    );
}
