pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod summary;

pub use config::{InputFiles, ReportConfig};
pub use error::ReportError;
pub use loader::{load_artifacts, load_json, RawArtifacts};
pub use pipeline::{build_report, generate, summarize_artifacts};
pub use report::{html::generate_html_report, writer::write_report, ReportModel};
pub use summary::{Finding, ScanResult, SeverityCounts};
