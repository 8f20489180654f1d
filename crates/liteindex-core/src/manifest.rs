//! Root manifest envelope.

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::entry::{Entry, EntryType, timestamp};

/// The root document of `all.json`.
///
/// Shares the entry key set, with the root-specific fixed values: `type`
/// is `directory`, `name` and `path` are empty, `format` is `"json"`, and
/// `content` carries the full ordered entry sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Ordered, depth-first sequence of entries for the whole scan.
    pub content: Vec<Entry>,

    /// Manifest generation time.
    #[serde(with = "timestamp")]
    pub created: DateTime<Utc>,

    /// Always `"json"` on the root.
    pub format: Option<String>,

    /// Never populated.
    pub hash: Option<String>,

    /// Never populated.
    pub hash_algorithm: Option<String>,

    /// Same as `created` on the root.
    #[serde(with = "timestamp")]
    pub last_modified: DateTime<Utc>,

    /// Always `null` on the root.
    pub mimetype: Option<String>,

    /// Always empty on the root.
    pub name: CompactString,

    /// Always empty on the root.
    pub path: String,

    /// Always `null` on the root.
    pub size: Option<u64>,

    /// Always `directory`.
    #[serde(rename = "type")]
    pub kind: EntryType,

    /// Always `true`.
    pub writable: bool,
}

impl Manifest {
    /// Wrap an ordered entry sequence into the root envelope.
    pub fn new(content: Vec<Entry>, generated: DateTime<Utc>) -> Self {
        Self {
            content,
            created: generated,
            format: Some("json".to_string()),
            hash: None,
            hash_algorithm: None,
            last_modified: generated,
            mimetype: None,
            name: CompactString::new(""),
            path: String::new(),
            size: None,
            kind: EntryType::Directory,
            writable: true,
        }
    }

    /// Number of entries in the listing.
    pub fn entry_count(&self) -> usize {
        self.content.len()
    }
}
