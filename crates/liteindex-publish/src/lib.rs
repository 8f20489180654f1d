//! Index building and publishing for liteindex.
//!
//! This crate turns a source directory into a browsable static site
//! fragment: it scans the tree, writes the contents-API manifest to
//! `output_dir/api/contents/all.json`, and copies the visible file tree
//! into `output_dir/files/`.
//!
//! # Example
//!
//! ```rust,no_run
//! use liteindex_core::PublishConfig;
//! use liteindex_publish::publish;
//!
//! let config = PublishConfig::new("/srv/content", "/srv/site");
//! let report = publish(&config).unwrap();
//!
//! println!("{} entries -> {}", report.entry_count, report.manifest_path.display());
//! ```

mod copy;
mod publisher;

pub use publisher::{PublishReport, publish};

// Re-export core types for convenience
pub use liteindex_core::{IndexError, Manifest, PublishConfig};
