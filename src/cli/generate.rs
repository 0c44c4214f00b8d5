use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::discovery;
use crate::extractor;
use crate::renderer;

/// Run the documentation generation: enumerate workflow files, extract
/// annotations from each, render and persist the report.
///
/// A missing workflows directory is fatal. An unreadable individual file is
/// skipped with a warning so one malformed file never aborts the batch.
/// Zero discovered workflows is not an error: the (sparse) report is still
/// written and a warning goes to stderr.
pub fn run(config: &Config) -> Result<()> {
    let workflows_dir = Path::new(&config.workflows_dir);
    if !workflows_dir.exists() {
        bail!(
            "Workflows directory does not exist: {}",
            config.workflows_dir
        );
    }

    info!("Parsing workflow files in {}", workflows_dir.display());
    let files = discovery::find_workflow_files(workflows_dir)?;

    let mut records = Vec::with_capacity(files.len());
    for file in &files {
        match extractor::extract_file(file) {
            Ok(record) => records.push(record),
            Err(err) => warn!("Failed to parse workflow file: {}", err),
        }
    }
    info!("Parsed {} workflow(s)", records.len());

    if records.is_empty() {
        warn!("No workflow files found in {}", config.workflows_dir);
        eprintln!(
            "Warning: No workflow files found in {}",
            config.workflows_dir
        );
    }

    let output_path = std::path::absolute(&config.output)
        .with_context(|| format!("Failed to resolve output path: {}", config.output))?;

    info!("Generating markdown documentation at {}", output_path.display());
    renderer::write_report(&output_path, &records)?;

    println!(
        "Successfully generated workflow documentation at {}",
        output_path.display()
    );
    println!("Documented {} workflow(s)", records.len());

    Ok(())
}
