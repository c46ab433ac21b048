use crate::report::{ReportModel, Section};
use crate::summary::severity::css_suffix;
use crate::summary::{Finding, SeverityCounts};

const EMPTY_BREAKDOWN: &str = "—";

/// Render a self-contained HTML report: inline CSS, no scripts, no external
/// references. Output depends only on `model`.
pub fn generate_html_report(model: &ReportModel) -> String {
    let sections: String = model.sections().iter().map(render_section).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{ font-family: system-ui, 'Segoe UI', Arial, sans-serif; margin: 2rem; color: #1e293b; }}
        h1 {{ margin-bottom: .25rem; }}
        h2 {{ margin-top: 2rem; }}
        table {{ border-collapse: collapse; width: 100%; margin: .5rem 0 1rem; }}
        th, td {{ border: 1px solid #ddd; padding: .5rem .6rem; font-size: 14px; text-align: left; }}
        th {{ background: #f5f5f5; }}
        .muted {{ color: #666; font-size: 12px; }}
        .sev {{ padding: .1rem .35rem; border-radius: .4rem; background: #eee; }}
        .sev-Critical {{ background: #ffd6d6; color: #a40000; font-weight: 600; }}
        .sev-High {{ background: #ffe4cc; color: #9a3d00; font-weight: 600; }}
        .sev-Medium {{ background: #fff2cc; color: #7a5d00; }}
        .sev-Low {{ background: #e6f4ea; color: #205a2f; }}
        .sev-Negligible, .sev-Unknown {{ color: #555; }}
        @media print {{
            body {{ margin: 0; }}
            h2 {{ break-after: avoid; }}
            table {{ break-inside: avoid; }}
        }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <div class="muted">Generated: {generated}</div>
{sections}</body>
</html>
"#,
        title = escape_html(&model.title),
        generated = escape_html(&model.generated),
        sections = sections,
    )
}

fn render_section(section: &Section<'_>) -> String {
    let mut out = format!(
        "\n    <h2>{}</h2>\n    <table>\n        <tr><td>Total</td><td>{}</td></tr>\n",
        section.heading, section.result.total
    );
    if let Some(by_severity) = &section.result.by_severity {
        out.push_str(&format!(
            "        <tr><td>By severity</td><td>{}</td></tr>\n",
            breakdown(by_severity)
        ));
    }
    out.push_str("    </table>\n");

    if let Some(detail_heading) = section.detail_heading {
        out.push_str(&render_top_findings(detail_heading, &section.result.top_findings));
    }
    out
}

fn breakdown(counts: &SeverityCounts) -> String {
    if counts.is_empty() {
        EMPTY_BREAKDOWN.to_string()
    } else {
        escape_html(&counts.display())
    }
}

/// Top-findings table; empty string when there is nothing to list.
fn render_top_findings(heading: &str, rows: &[Finding]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut out = format!(
        "    <h3>{}</h3>\n    <table>\n        <tr><th>Severity</th><th>ID</th><th>Package</th><th>Version</th><th>Fix Versions</th></tr>\n",
        heading
    );
    for row in rows {
        out.push_str(&format!(
            "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            severity_chip(&row.severity),
            escape_html(&row.id),
            escape_html(&row.package),
            escape_html(&row.version),
            escape_html(&row.fix_versions),
        ));
    }
    out.push_str("    </table>\n");
    out
}

fn severity_chip(label: &str) -> String {
    format!(
        r#"<span class="sev sev-{}">{}</span>"#,
        css_suffix(label),
        escape_html(label)
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::ScanResult;

    fn model() -> ReportModel {
        ReportModel {
            title: "Security Scan Report".into(),
            generated: "2026-01-01T00:00:00Z".into(),
            grype_repo: ScanResult {
                total: 0,
                by_severity: Some(SeverityCounts::new()),
                top_findings: vec![],
            },
            grype_venv: ScanResult {
                total: 2,
                by_severity: Some(["High", "Critical"].into_iter().collect()),
                top_findings: vec![
                    Finding {
                        severity: "Critical".into(),
                        id: "CVE-1".into(),
                        package: "<script>".into(),
                        version: "1.0".into(),
                        fix_versions: "1.1, 1.2".into(),
                    },
                    Finding {
                        severity: "High".into(),
                        id: "GHSA-x".into(),
                        package: "requests".into(),
                        version: "2.0".into(),
                        fix_versions: String::new(),
                    },
                ],
            },
            semgrep: ScanResult {
                total: 1,
                by_severity: Some(["ERROR"].into_iter().collect()),
                top_findings: vec![],
            },
            bandit: ScanResult::default(),
            gitleaks: ScanResult::count_only(2),
            trivy: ScanResult::count_only(3),
        }
    }

    #[test]
    fn test_document_is_self_contained() {
        let html = generate_html_report(&model());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
        assert!(html.contains("Generated: 2026-01-01T00:00:00Z"));
    }

    #[test]
    fn test_every_section_renders() {
        let html = generate_html_report(&model());
        for heading in ["Grype (repo)", "Grype (venv)", "Semgrep", "Bandit", "Gitleaks", "Trivy (IaC/config)"] {
            assert!(html.contains(&format!("<h2>{}</h2>", heading)), "missing {}", heading);
        }
        assert!(html.contains("<tr><td>Total</td><td>3</td></tr>"));
    }

    #[test]
    fn test_breakdown_rows() {
        let html = generate_html_report(&model());
        assert!(html.contains("<td>By severity</td><td>High=1, Critical=1</td>"));
        assert!(html.contains("<td>By severity</td><td>ERROR=1</td>"));
        // empty grype repo breakdown
        assert!(html.contains("<td>By severity</td><td>—</td>"));
        // bandit default result has no breakdown row, gitleaks neither
        assert_eq!(html.matches("By severity").count(), 3);
    }

    #[test]
    fn test_top_table_only_when_rows_exist() {
        let html = generate_html_report(&model());
        assert!(html.contains("Top 10 venv vulnerabilities"));
        assert!(!html.contains("Top 10 repo vulnerabilities"));
        assert!(html.contains(
            "<th>Severity</th><th>ID</th><th>Package</th><th>Version</th><th>Fix Versions</th>"
        ));
        assert!(html.contains(r#"<span class="sev sev-Critical">Critical</span>"#));
        assert!(html.contains("<td>1.1, 1.2</td>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let html = generate_html_report(&model());
        assert!(html.contains("<td>&lt;script&gt;</td>"));
    }

    #[test]
    fn test_hostile_severity_label() {
        let chip = severity_chip("<b>\"x\"</b>");
        assert_eq!(
            chip,
            r#"<span class="sev sev-bxb">&lt;b&gt;&quot;x&quot;&lt;/b&gt;</span>"#
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let m = model();
        assert_eq!(generate_html_report(&m), generate_html_report(&m));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b<c>'d'"), "a&amp;b&lt;c&gt;&#x27;d&#x27;");
    }
}
