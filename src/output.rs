//! CLI output formatting.
//!
//! Every command reports what it found as an inventory: categories with a
//! positional index and plan count, plans under them with their source file
//! as an indented context line, then any skipped files.
//!
//! ```text
//! Plans by Category
//! 001 Languages & Paradigms (2 plans)
//!     001 elixir and OTP
//!         Source: elixir-otp.md
//!     002 Go Internals
//!         Source: go-internals.md
//!
//! Skipped
//!     draft.md: has no front matter
//!
//! Wrote README.md: 2 plans in 1 category, 1 skipped
//! ```
//!
//! Each command has a `format_*` function returning lines, for testability,
//! and a `print_*` wrapper writing them to stdout.

use crate::generate::{CheckOutcome, Report, Scan};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn summary(scan: &Scan) -> String {
    format!(
        "{} in {}, {} skipped",
        plural(scan.catalog.total, "plan", "plans"),
        plural(scan.catalog.groups.len(), "category", "categories"),
        scan.skipped.len()
    )
}

/// Format the catalog and skipped files.
pub fn format_scan_output(scan: &Scan) -> Vec<String> {
    let mut lines = vec!["Plans by Category".to_string()];

    for (i, group) in scan.catalog.groups.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            group.name,
            plural(group.entries.len(), "plan", "plans")
        ));
        for (j, entry) in group.entries.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(j + 1), entry.title));
            lines.push(format!("{}Source: {}", indent(2), entry.filename));
        }
    }

    if !scan.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for skip in &scan.skipped {
            lines.push(format!("{}{}: {}", indent(1), skip.filename, skip.reason));
        }
    }

    lines
}

/// Format the result of writing the index.
pub fn format_generate_output(report: &Report) -> Vec<String> {
    let mut lines = format_scan_output(&report.scan);
    lines.push(String::new());
    lines.push(format!(
        "Wrote {}: {}",
        file_label(&report.output_path),
        summary(&report.scan)
    ));
    lines
}

/// Format the result of comparing the index on disk with a fresh rendering.
pub fn format_check_output(scan: &Scan, outcome: CheckOutcome, output: &str) -> Vec<String> {
    let status = match outcome {
        CheckOutcome::UpToDate => format!("{output} is up to date"),
        CheckOutcome::Stale => format!("{output} is stale; run plan-index to regenerate it"),
        CheckOutcome::Missing => format!("{output} does not exist; run plan-index to create it"),
    };
    vec![status, summary(scan)]
}

pub fn print_scan_output(scan: &Scan) {
    for line in format_scan_output(scan) {
        println!("{}", line);
    }
}

pub fn print_generate_output(report: &Report) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

pub fn print_check_output(scan: &Scan, outcome: CheckOutcome, output: &str) {
    for line in format_check_output(scan, outcome, output) {
        println!("{}", line);
    }
}
