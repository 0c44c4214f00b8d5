//! Annotation extraction from workflow definition files.
//!
//! Workflows embed documentation as comment lines of the form
//! `# @workflow.<field>: <value>`. Extraction is a line-oriented scan with
//! two validation stages: a loose `# @` prefix check on the trimmed line,
//! then a strict key/value tokenization of the remainder. Lines failing
//! either stage are ignored, never an error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Documentation extracted from a single workflow file.
///
/// The empty string denotes an absent field: the annotation grammar cannot
/// express "present but empty" distinctly, and the renderer treats the two
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowRecord {
    /// Path string exactly as given to the extractor, not canonicalized.
    pub source_path: String,
    /// Base name of the source file, always present, used as display fallback.
    pub file_label: String,
    pub name: String,
    pub description: String,
    pub owners: String,
    pub tags: String,
    pub params: String,
    pub results: String,
    pub permissions: String,
    pub requirements: String,
}

impl WorkflowRecord {
    /// True when any of the extended fields shown in the detail section is set.
    pub fn has_details(&self) -> bool {
        !self.params.is_empty()
            || !self.results.is_empty()
            || !self.permissions.is_empty()
            || !self.requirements.is_empty()
    }
}

/// Annotation namespace before the dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Workflow,
    /// Job-level documentation, recognized but not yet stored.
    Job,
    /// Step-level documentation, recognized but not yet stored.
    Step,
}

/// Workflow-level field vocabulary. Well-formed but unrecognized field names
/// map to `Ignored` so forward-compatible annotations parse without effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Description,
    Owners,
    Tags,
    Params,
    Results,
    Permissions,
    Requirements,
    Ignored,
}

impl Field {
    fn from_key(key: &str) -> Self {
        match key {
            "name" => Field::Name,
            "description" => Field::Description,
            "owners" => Field::Owners,
            "tags" => Field::Tags,
            "params" => Field::Params,
            "results" => Field::Results,
            "permissions" => Field::Permissions,
            "requirements" => Field::Requirements,
            _ => Field::Ignored,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Annotation<'a> {
    scope: Scope,
    field: Field,
    value: &'a str,
}

/// Tokenize one line into an annotation, or `None` when the line does not
/// qualify.
///
/// Stage 1: the trimmed line must start with hash, exactly one space, at-sign.
/// Stage 2: the remainder must split as `<namespace>.<field>: <value>` with a
/// known namespace and a field made of lowercase ASCII letters only.
fn parse_line(line: &str) -> Option<Annotation<'_>> {
    let rest = line.trim().strip_prefix("# @")?;

    let (key, value) = rest.split_once(':')?;
    let (namespace, field) = key.split_once('.')?;

    let scope = match namespace {
        "workflow" => Scope::Workflow,
        "job" => Scope::Job,
        "step" => Scope::Step,
        _ => return None,
    };

    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }

    Some(Annotation {
        scope,
        field: Field::from_key(field),
        value: value.trim(),
    })
}

/// Extract annotation documentation from a workflow file.
///
/// Scans top-to-bottom; later occurrences of a field overwrite earlier ones.
/// A file with no annotations yields a record with every optional field
/// empty. Fails only on I/O errors (open or mid-scan read).
pub fn extract_file(path: &Path) -> Result<WorkflowRecord> {
    let file = File::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut record = WorkflowRecord {
        source_path: path.display().to_string(),
        file_label: file_label(path),
        ..WorkflowRecord::default()
    };

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(annotation) = parse_line(&line) else {
            continue;
        };
        if annotation.scope != Scope::Workflow {
            continue;
        }

        let value = annotation.value.to_string();
        match annotation.field {
            Field::Name => record.name = value,
            Field::Description => record.description = value,
            Field::Owners => record.owners = value,
            Field::Tags => record.tags = value,
            Field::Params => record.params = value,
            Field::Results => record.results = value,
            Field::Permissions => record.permissions = value,
            Field::Requirements => record.requirements = value,
            Field::Ignored => {}
        }
    }

    Ok(record)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
