//! Core types for liteindex.
//!
//! This crate provides the contents-API data model shared across the
//! liteindex crates: manifest entries, the root manifest envelope,
//! configuration, and error types.

mod config;
mod entry;
mod error;
mod manifest;

pub use config::{PublishConfig, PublishConfigBuilder};
pub use entry::{Entry, EntryType, NOTEBOOK_EXTENSION, timestamp};
pub use error::IndexError;
pub use manifest::Manifest;
