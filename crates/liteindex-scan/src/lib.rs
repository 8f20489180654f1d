//! Directory tree scanning for liteindex.
//!
//! This crate walks a source directory depth-first and produces the flat,
//! ordered entry sequence that becomes the manifest's `content` array.
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use liteindex_scan::TreeScanner;
//!
//! let scanner = TreeScanner::new(Utc::now());
//! let entries = scanner.scan("/path/to/content".as_ref()).unwrap();
//!
//! println!("{} entries", entries.len());
//! ```

mod mime;
mod scanner;

pub use mime::{GuessMimeResolver, MimeResolver};
pub use scanner::TreeScanner;

// Re-export core types for convenience
pub use liteindex_core::{Entry, EntryType, IndexError};
