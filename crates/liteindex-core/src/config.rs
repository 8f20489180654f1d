//! Publish configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for one scan-and-publish run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PublishConfig {
    /// Directory to index.
    pub source_dir: PathBuf,

    /// Directory receiving `api/contents/all.json` and `files/`.
    pub output_dir: PathBuf,
}

impl PublishConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.source_dir {
            Some(dir) if dir.as_os_str().is_empty() => {
                return Err("Source directory cannot be empty".to_string());
            }
            None => return Err("Source directory is required".to_string()),
            _ => {}
        }
        match &self.output_dir {
            Some(dir) if dir.as_os_str().is_empty() => {
                return Err("Output directory cannot be empty".to_string());
            }
            None => return Err("Output directory is required".to_string()),
            _ => {}
        }
        Ok(())
    }
}

impl PublishConfig {
    /// Create a new publish config builder.
    pub fn builder() -> PublishConfigBuilder {
        PublishConfigBuilder::default()
    }

    /// Create a config from a source and output directory.
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Directory holding the serialized manifest.
    pub fn api_dir(&self) -> PathBuf {
        self.output_dir.join("api").join("contents")
    }

    /// Full path of `all.json`.
    pub fn manifest_path(&self) -> PathBuf {
        self.api_dir().join("all.json")
    }

    /// Directory receiving the copied file tree.
    pub fn files_dir(&self) -> PathBuf {
        self.output_dir.join("files")
    }
}
