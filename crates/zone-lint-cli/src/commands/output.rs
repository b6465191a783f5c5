//! Shared output formatting for lint reports.

use std::fmt::Write;
use std::io::IsTerminal;

use anyhow::Result;
use zone_lint_core::{LintReport, Severity, ViolationDiagnostic};

use crate::OutputFormat;

/// Print a lint report in the specified format.
pub fn print(report: &LintReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", render_text(report, std::io::stdout().is_terminal()));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Compact => print!("{}", render_compact(report)),
        OutputFormat::Pretty => print_pretty(report),
    }
    Ok(())
}

/// Violations grouped under a header per zone, then a summary line.
pub fn render_text(report: &LintReport, color: bool) -> String {
    let mut out = String::new();

    for (zone, violations) in &report.zones {
        if violations.is_empty() {
            continue;
        }
        let _ = writeln!(out, "== {zone} ({}) ==\n", violations.len());
        for violation in violations {
            let severity = paint(
                color,
                severity_color(violation.severity),
                &violation.severity.to_string(),
            );
            let location = match violation.line {
                Some(line) => format!("{}:{line}", violation.file_path.display()),
                None => violation.file_path.display().to_string(),
            };
            let _ = writeln!(out, "{} at {location}", violation.rule);
            let _ = writeln!(out, "  {severity}: {}", violation.message);
            let _ = writeln!(out, "  = category: {}\n", violation.category);
        }
    }

    let _ = writeln!(out, "{}", summary(report, color));
    out
}

/// One line per violation.
pub fn render_compact(report: &LintReport) -> String {
    report.violations().map(|v| format!("{v}\n")).collect()
}

fn print_pretty(report: &LintReport) {
    for violation in report.violations() {
        let content = std::fs::read_to_string(&violation.file_path).unwrap_or_default();
        let diagnostic = miette::Report::new(ViolationDiagnostic::new(violation, content));
        println!("{diagnostic:?}");
    }
    println!("{}", summary(report, std::io::stdout().is_terminal()));
}

fn summary(report: &LintReport, color: bool) -> String {
    let (errors, warnings, infos) = report.count_by_severity();
    let code = if errors > 0 {
        "31"
    } else if warnings > 0 {
        "33"
    } else {
        "32"
    };
    let zones = report.zones.len();
    paint(
        color,
        code,
        &format!(
            "Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} file(s) across {zones} zone(s)",
            report.files_checked
        ),
    )
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "31",
        Severity::Warning => "33",
        Severity::Info => "34",
    }
}

fn paint(color: bool, code: &str, text: &str) -> String {
    if color {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}
