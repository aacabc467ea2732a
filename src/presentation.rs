use std::io::{self, Write};
use std::path::Path;

use redate_domain::{BatchReport, FileSelection};
use redate_shared_kernel::Timestamp;
use serde::Serialize;

fn short_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// File names of the selection followed by a count line.
pub fn write_selection(out: &mut impl Write, selection: &FileSelection) -> io::Result<()> {
    for path in selection.iter() {
        writeln!(out, "{}", short_name(path))?;
    }
    writeln!(out)?;
    writeln!(out, "{} file(s) found!", selection.len())
}

/// Per-file before/after echo followed by a batch summary.
pub fn write_report(out: &mut impl Write, report: &BatchReport) -> io::Result<()> {
    for change in &report.changes {
        writeln!(out, "{}", short_name(&change.path))?;
        writeln!(out, "  Old: [{}]  New: [{}]", change.old, change.new)?;
    }
    for failure in &report.failures {
        writeln!(out, "FAILED {}: {}", failure.path.display(), failure.error)?;
    }
    writeln!(out)?;
    writeln!(out, "File dates changed for {} file(s)", report.changes.len())?;
    if !report.failures.is_empty() {
        writeln!(out, "{} file(s) failed", report.failures.len())?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonSelection {
    files: Vec<String>,
    count: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    changed: Vec<JsonChange<'a>>,
    failed: Vec<JsonFailure>,
}

#[derive(Serialize)]
struct JsonChange<'a> {
    file: String,
    old: &'a Timestamp,
    new: &'a Timestamp,
}

#[derive(Serialize)]
struct JsonFailure {
    file: String,
    error: String,
}

pub fn write_json_selection(out: &mut impl Write, selection: &FileSelection) -> io::Result<()> {
    let dto = JsonSelection {
        files: selection.iter().map(|p| p.display().to_string()).collect(),
        count: selection.len(),
    };
    serde_json::to_writer_pretty(&mut *out, &dto).map_err(io::Error::other)?;
    writeln!(out)
}

pub fn write_json_report(out: &mut impl Write, report: &BatchReport) -> io::Result<()> {
    let dto = JsonReport {
        changed: report
            .changes
            .iter()
            .map(|change| JsonChange {
                file: change.path.display().to_string(),
                old: &change.old,
                new: &change.new,
            })
            .collect(),
        failed: report
            .failures
            .iter()
            .map(|failure| JsonFailure {
                file: failure.path.display().to_string(),
                error: failure.error.to_string(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &dto).map_err(io::Error::other)?;
    writeln!(out)
}
