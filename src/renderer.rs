//! Markdown report rendering.
//!
//! Consumes a sequence of `WorkflowRecord` in input order and produces one
//! document: a summary table plus a detail section for workflows carrying
//! extended fields. Output is deterministic for identical input sequences.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::extractor::WorkflowRecord;

const PLACEHOLDER: &str =
    "*No workflows define parameters, results, permissions, or requirements.*";

/// Escape characters that can break a pipe-delimited markdown table cell:
/// backslash, pipe, backtick, asterisk, underscore, and square brackets.
pub fn escape_markdown(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '\\' | '|' | '`' | '*' | '_' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Table cell for an optional field: `-` when absent, escaped otherwise.
fn table_cell(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        escape_markdown(value)
    }
}

/// Render the full markdown document from the records, in input order.
pub fn render(records: &[WorkflowRecord]) -> String {
    let mut doc = String::new();

    doc.push_str("# Workflow Documentation\n\n");
    doc.push_str("This document provides an overview of all GitHub workflows in this repository.\n\n");

    doc.push_str("| Workflow | Description | Owners | Tags | File |\n");
    doc.push_str("|----------|-------------|--------|------|------|\n");
    for record in records {
        doc.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            table_cell(&record.name),
            table_cell(&record.description),
            table_cell(&record.owners),
            table_cell(&record.tags),
            escape_markdown(&record.file_label),
        ));
    }

    doc.push_str("\n## Detailed Workflow Information\n\n");

    if records.iter().any(WorkflowRecord::has_details) {
        for record in records.iter().filter(|r| r.has_details()) {
            let title = if record.name.is_empty() {
                &record.file_label
            } else {
                &record.name
            };
            doc.push_str(&format!("### {}\n\n", title));

            if !record.params.is_empty() {
                doc.push_str(&format!("**Parameters:** {}\n\n", record.params));
            }
            if !record.results.is_empty() {
                doc.push_str(&format!("**Results:** {}\n\n", record.results));
            }
            if !record.permissions.is_empty() {
                doc.push_str(&format!("**Permissions:** {}\n\n", record.permissions));
            }
            if !record.requirements.is_empty() {
                doc.push_str(&format!("**Requirements:** {}\n\n", record.requirements));
            }
        }
    } else {
        doc.push_str(PLACEHOLDER);
        doc.push('\n');
    }

    doc
}

/// Render the records and persist the document to `path`.
///
/// The document is written to a temporary file in the destination directory
/// and moved into place with a rename, so a failed write leaves any previous
/// content of `path` intact.
pub fn write_report(path: &Path, records: &[WorkflowRecord]) -> Result<()> {
    let content = render(records);

    // parent() of a bare filename is the empty path
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;

    Ok(())
}
