use colored::*;
use scanbrief_core::summary::severity;
use scanbrief_core::{Finding, ReportModel, ScanResult};
use std::path::Path;

/// Print the report summary to the terminal.
pub fn print_summary(model: &ReportModel, written: &Path) {
    println!();
    println!(
        "{}",
        format!(
            " scanbrief v{} — {} ({})",
            env!("CARGO_PKG_VERSION"),
            model.title,
            model.generated
        )
        .bold()
    );
    println!();

    for section in model.sections() {
        print_section(section.heading, section.result);

        if section.detail_heading.is_some() && !section.result.top_findings.is_empty() {
            for finding in &section.result.top_findings {
                print_finding(finding);
            }
        }
        println!();
    }

    println!(" {}", "=".repeat(60).dimmed());
    let total = model.total_findings();
    println!(
        " {} Total findings across all tools: {}",
        "|-".dimmed(),
        if total > 0 {
            total.to_string().yellow().bold().to_string()
        } else {
            "0".green().bold().to_string()
        }
    );
    println!(" {} Report: {}", "|-".dimmed(), written.display().to_string().cyan());
    println!();
}

fn print_section(heading: &str, result: &ScanResult) {
    println!(" {}", heading.bold().underline());
    println!(" {} Total: {}", "|-".dimmed(), result.total);
    if let Some(by_severity) = &result.by_severity {
        let breakdown = if by_severity.is_empty() {
            "—".dimmed().to_string()
        } else {
            by_severity.display()
        };
        println!(" {} By severity: {}", "|-".dimmed(), breakdown);
    }
}

fn print_finding(finding: &Finding) {
    let fix = if finding.fix_versions.is_empty() {
        "no fix".dimmed().to_string()
    } else {
        format!("fix: {}", finding.fix_versions).green().to_string()
    };
    println!(
        "   {} {} {}@{} ({})",
        color_severity(&finding.severity),
        finding.id,
        finding.package,
        finding.version,
        fix
    );
}

fn color_severity(label: &str) -> ColoredString {
    let padded = format!("{:<10}", label);
    match severity::rank(label) {
        0 => padded.red().bold(),
        1 => padded.yellow().bold(),
        2 => padded.yellow(),
        3 => padded.blue(),
        _ => padded.white(),
    }
}
