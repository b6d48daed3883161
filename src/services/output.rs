use crate::domain::models::{
    DirectoryResult, DirectoryScan, JsonOut, RunReport, Status, ValidationReport,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

const RULE_WIDTH: usize = 60;
const TITLE: &str = "PL/SQL Syntax Validator";

pub fn print_json<T: Serialize>(ok: bool, data: T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&JsonOut { ok, data })?);
    Ok(())
}

pub fn render_report(report: &ValidationReport) -> String {
    let mut out = format!("{} {}\n", report.status, report.file_path.display());
    for e in &report.errors {
        let _ = writeln!(out, "  - error: {}", e);
    }
    for w in &report.warnings {
        let _ = writeln!(out, "  - warning: {}", w);
    }
    out
}

fn display_dir(name: &str) -> String {
    format!("{}/", name.trim_end_matches('/'))
}

pub fn render_directory_result(label: &str, path: &Path, result: &DirectoryResult) -> String {
    if result.reports.is_empty() {
        return format!(
            "{} no .sql files found in {}\n",
            Status::Warning,
            path.display()
        );
    }
    let mut out = format!("Checking {} path(s)...\n\n", result.reports.len());
    for r in &result.reports {
        out.push_str(&render_report(r));
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "{}: {} path(s), {} passed, {} with warnings, {} failed",
        label,
        result.reports.len(),
        result.count(Status::Success),
        result.count(Status::Warning),
        result.count(Status::Failure)
    );
    out
}

pub fn render_directory_scan(scan: &DirectoryScan) -> String {
    let label = display_dir(&scan.name);
    match &scan.result {
        None => format!("{} directory {} not found\n", Status::Warning, label),
        Some(result) => {
            let mut out = format!(
                "\nValidating directory: {}\n{}\n",
                label,
                "-".repeat(RULE_WIDTH)
            );
            out.push_str(&render_directory_result(&label, &scan.path, result));
            out
        }
    }
}

pub fn render_banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{TITLE}\n{rule}\n")
}

pub fn render_verdict(all_valid: bool) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    if all_valid {
        format!("\n{rule}\n{} All files validated successfully!\n", Status::Success)
    } else {
        format!("\n{rule}\n{} Some files contain errors.\n", Status::Failure)
    }
}

pub fn render_run(report: &RunReport) -> String {
    let mut out = render_banner();
    for scan in &report.directories {
        out.push_str(&render_directory_scan(scan));
    }
    out.push_str(&render_verdict(report.all_valid));
    out
}
