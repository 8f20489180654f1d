//! Contents-API entry types.

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// File extension that marks a notebook.
pub const NOTEBOOK_EXTENSION: &str = ".ipynb";

/// Classification of a filesystem object in the contents listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Directory.
    Directory,
    /// Regular file with the notebook extension.
    Notebook,
    /// Any other regular file.
    File,
}

impl EntryType {
    /// Classify a regular file by its name.
    pub fn for_file(name: &str) -> Self {
        if name.ends_with(NOTEBOOK_EXTENSION) {
            Self::Notebook
        } else {
            Self::File
        }
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// One record in the contents listing.
///
/// Field order is the wire order of `all.json`; every key is always
/// present, with `null` standing in for absent values. The `content`,
/// `format`, `hash` and `hash_algorithm` fields are reserved for schema
/// compatibility and never populated on scanned entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Nested listing; always `null` for scanned entries.
    pub content: Option<Vec<Entry>>,

    /// Time the manifest was generated (not a filesystem birth time).
    #[serde(with = "timestamp")]
    pub created: DateTime<Utc>,

    /// Content format; always `null` for scanned entries.
    pub format: Option<String>,

    /// Content hash; never populated.
    pub hash: Option<String>,

    /// Hash algorithm; never populated.
    pub hash_algorithm: Option<String>,

    /// Filesystem modification time, converted to UTC.
    #[serde(with = "timestamp")]
    pub last_modified: DateTime<Utc>,

    /// Best-effort mimetype guess from the file extension.
    pub mimetype: Option<String>,

    /// Base name (no path separators).
    pub name: CompactString,

    /// Slash-separated path relative to the scan root, no leading slash.
    pub path: String,

    /// Byte count for files, `null` for directories.
    pub size: Option<u64>,

    /// Entry classification.
    #[serde(rename = "type")]
    pub kind: EntryType,

    /// Always `true`.
    pub writable: bool,
}

impl Entry {
    /// Create an entry for a regular file, classifying it by name.
    pub fn file(
        name: impl Into<CompactString>,
        path: impl Into<String>,
        size: u64,
        mimetype: Option<String>,
        created: DateTime<Utc>,
        last_modified: DateTime<Utc>,
    ) -> Self {
        let name = name.into();
        let kind = EntryType::for_file(&name);
        Self {
            content: None,
            created,
            format: None,
            hash: None,
            hash_algorithm: None,
            last_modified,
            mimetype,
            name,
            path: path.into(),
            size: Some(size),
            kind,
            writable: true,
        }
    }

    /// Create an entry for a directory.
    pub fn directory(
        name: impl Into<CompactString>,
        path: impl Into<String>,
        created: DateTime<Utc>,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            content: None,
            created,
            format: None,
            hash: None,
            hash_algorithm: None,
            last_modified,
            mimetype: None,
            name: name.into(),
            path: path.into(),
            size: None,
            kind: EntryType::Directory,
            writable: true,
        }
    }

    /// Check if this entry describes a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}

/// Serde adapter for the `Z`-suffixed ISO-8601 timestamps the contents
/// API emits (`+00:00` offsets are never written).
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
