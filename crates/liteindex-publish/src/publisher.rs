//! Scan-and-publish operation.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;

use liteindex_core::{IndexError, Manifest, PublishConfig};
use liteindex_scan::TreeScanner;

use crate::copy::copy_tree;

/// Outcome of a successful publish, surfaced to the caller for display.
#[derive(Debug, Clone)]
pub struct PublishReport {
    /// Number of entries written to the manifest.
    pub entry_count: usize,
    /// Path of the serialized manifest.
    pub manifest_path: PathBuf,
    /// Directory holding the copied file tree.
    pub files_dir: PathBuf,
}

/// Index `source_dir` and publish the manifest plus file tree under
/// `output_dir`.
///
/// Writes `output_dir/api/contents/all.json`, fully replacing any prior
/// manifest, and copies the visible source tree into `output_dir/files/`.
/// Fails with `SourceNotFound` before creating any output when the source
/// is missing; a mid-run filesystem failure aborts immediately and may
/// leave partial output behind, which the next successful run overwrites.
pub fn publish(config: &PublishConfig) -> Result<PublishReport, IndexError> {
    let source = &config.source_dir;
    if !source.is_dir() {
        return Err(IndexError::SourceNotFound {
            path: source.clone(),
        });
    }

    let api_dir = config.api_dir();
    fs::create_dir_all(&api_dir).map_err(|e| IndexError::io(&api_dir, e))?;
    let files_dir = config.files_dir();
    fs::create_dir_all(&files_dir).map_err(|e| IndexError::io(&files_dir, e))?;

    let generated = Utc::now();
    let scanner = TreeScanner::new(generated);
    let entries = scanner.scan(source)?;
    let manifest = Manifest::new(entries, generated);

    let json = serde_json::to_string_pretty(&manifest)
        .map_err(|source| IndexError::Serialize { source })?;
    let manifest_path = config.manifest_path();
    fs::write(&manifest_path, json).map_err(|e| IndexError::io(&manifest_path, e))?;
    tracing::debug!(
        manifest = %manifest_path.display(),
        entries = manifest.entry_count(),
        "wrote manifest"
    );

    let copied = copy_tree(source, &files_dir)?;
    tracing::debug!(files = copied, dest = %files_dir.display(), "copied file tree");

    Ok(PublishReport {
        entry_count: manifest.entry_count(),
        manifest_path,
        files_dir,
    })
}
