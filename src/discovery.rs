//! Workflow file discovery.
//!
//! Enumerates `.yml`/`.yaml` files in a workflows directory. Symlinks are
//! skipped with a warning, and a missing directory yields an empty result:
//! absence of workflows is a valid, non-fatal state.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Check whether a path carries a YAML extension (`.yml` or `.yaml`,
/// case-insensitive).
pub fn is_yaml_file(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref(),
        Some("yml") | Some("yaml")
    )
}

/// Find workflow definition files in `dir`.
///
/// Matches `*.yml` then `*.yaml`, each pattern's hits in sorted order.
/// Returns an empty list when the directory does not exist.
pub fn find_workflow_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for extension_pattern in ["*.yml", "*.yaml"] {
        let pattern = dir.join(extension_pattern).to_string_lossy().into_owned();
        let entries = glob(&pattern).map_err(|source| Error::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if !is_yaml_file(&path) {
                continue;
            }

            // non-dereferencing stat: a symlinked workflow must be skipped,
            // not followed
            match fs::symlink_metadata(&path) {
                Ok(meta) if meta.file_type().is_symlink() => {
                    warn!("Skipping symlink: {}", path.display());
                }
                Ok(_) => files.push(path),
                Err(err) => {
                    warn!("Failed to stat {}: {}", path.display(), err);
                }
            }
        }
    }

    info!(
        "Found {} workflow file(s) in {}",
        files.len(),
        dir.display()
    );
    Ok(files)
}
