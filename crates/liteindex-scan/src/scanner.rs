//! Sequential depth-first directory scanner.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use liteindex_core::{Entry, IndexError};

use crate::mime::{GuessMimeResolver, MimeResolver};

/// Scanner producing the flat, ordered entry sequence for a directory tree.
///
/// Children are visited in ascending name order; a directory's entry is
/// followed immediately by its descendants. Hidden entries (leading `.`)
/// are pruned together with their subtrees. Any read or stat failure aborts
/// the scan with the offending path; no partial sequence is returned.
pub struct TreeScanner<M = GuessMimeResolver> {
    mime: M,
    generated: DateTime<Utc>,
}

impl TreeScanner {
    /// Create a scanner stamping entries with the given generation time.
    pub fn new(generated: DateTime<Utc>) -> Self {
        Self {
            mime: GuessMimeResolver,
            generated,
        }
    }
}

impl<M: MimeResolver> TreeScanner<M> {
    /// Create a scanner with a custom mimetype resolver.
    pub fn with_resolver(mime: M, generated: DateTime<Utc>) -> Self {
        Self { mime, generated }
    }

    /// Scan `root`, which the caller guarantees is a readable directory.
    pub fn scan(&self, root: &Path) -> Result<Vec<Entry>, IndexError> {
        let mut entries = Vec::new();
        self.scan_dir(root, "", &mut entries)?;
        Ok(entries)
    }

    fn scan_dir(&self, dir: &Path, prefix: &str, out: &mut Vec<Entry>) -> Result<(), IndexError> {
        tracing::debug!(dir = %dir.display(), prefix, "scanning directory");

        let mut children = Vec::new();
        for child in fs::read_dir(dir).map_err(|e| IndexError::io(dir, e))? {
            let child = child.map_err(|e| IndexError::io(dir, e))?;
            let name = child.file_name().to_string_lossy().into_owned();
            children.push((name, child.path()));
        }
        // Total, locale-independent order: ascending by codepoint.
        children.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, path) in children {
            if name.starts_with('.') {
                continue;
            }

            let metadata = fs::metadata(&path).map_err(|e| IndexError::io(&path, e))?;
            let modified = metadata
                .modified()
                .map_err(|e| IndexError::io(&path, e))?;
            let last_modified = DateTime::<Utc>::from(modified);

            let relative_path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}{name}")
            };

            if metadata.is_dir() {
                out.push(Entry::directory(
                    name,
                    relative_path.clone(),
                    self.generated,
                    last_modified,
                ));
                self.scan_dir(&path, &format!("{relative_path}/"), out)?;
            } else {
                let mimetype = self.mime.resolve(&name);
                out.push(Entry::file(
                    name,
                    relative_path,
                    metadata.len(),
                    mimetype,
                    self.generated,
                    last_modified,
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liteindex_core::EntryType;
    use std::fs;
    use tempfile::TempDir;

    /// Resolver with a fixed two-entry table.
    struct FixedResolver;

    impl MimeResolver for FixedResolver {
        fn resolve(&self, name: &str) -> Option<String> {
            if name.ends_with(".txt") {
                Some("text/x-fixed".to_string())
            } else {
                None
            }
        }
    }

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::write(root.join("a.txt"), "hello").unwrap();
        fs::write(root.join("notebook.ipynb"), "0123456789").unwrap();
        fs::write(root.join(".secret"), "shh").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub/b.txt"), "hi").unwrap();
        fs::create_dir(root.join(".hidden_dir")).unwrap();
        fs::write(root.join(".hidden_dir/visible.txt"), "x").unwrap();

        temp
    }

    #[test]
    fn test_scan_order_and_paths() {
        let temp = create_test_tree();
        let scanner = TreeScanner::new(Utc::now());
        let entries = scanner.scan(temp.path()).unwrap();

        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["a.txt", "notebook.ipynb", "sub", "sub/b.txt"]);
    }

    #[test]
    fn test_classification_and_sizes() {
        let temp = create_test_tree();
        let scanner = TreeScanner::new(Utc::now());
        let entries = scanner.scan(temp.path()).unwrap();

        assert_eq!(entries[0].kind, EntryType::File);
        assert_eq!(entries[0].size, Some(5));
        assert_eq!(entries[1].kind, EntryType::Notebook);
        assert_eq!(entries[1].size, Some(10));
        assert_eq!(entries[2].kind, EntryType::Directory);
        assert_eq!(entries[2].size, None);
        assert_eq!(entries[3].size, Some(2));
    }

    #[test]
    fn test_hidden_subtrees_pruned() {
        let temp = create_test_tree();
        let scanner = TreeScanner::new(Utc::now());
        let entries = scanner.scan(temp.path()).unwrap();

        assert!(entries.iter().all(|e| !e.name.starts_with('.')));
        // Non-hidden descendants of a hidden directory stay invisible too.
        assert!(entries.iter().all(|e| !e.path.contains("visible.txt")));
    }

    #[test]
    fn test_descendants_follow_parent_contiguously() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("alpha")).unwrap();
        fs::write(root.join("alpha/inner.txt"), "1").unwrap();
        fs::create_dir(root.join("alpha/nested")).unwrap();
        fs::write(root.join("alpha/nested/deep.txt"), "22").unwrap();
        fs::write(root.join("beta.txt"), "333").unwrap();

        let scanner = TreeScanner::new(Utc::now());
        let entries = scanner.scan(root).unwrap();

        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "alpha",
                "alpha/inner.txt",
                "alpha/nested",
                "alpha/nested/deep.txt",
                "beta.txt",
            ]
        );
    }

    #[test]
    fn test_ipynb_bak_is_a_plain_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("x.ipynb.bak"), "old").unwrap();

        let scanner = TreeScanner::new(Utc::now());
        let entries = scanner.scan(temp.path()).unwrap();
        assert_eq!(entries[0].kind, EntryType::File);
    }

    #[test]
    fn test_injected_resolver_is_used() {
        let temp = create_test_tree();
        let scanner = TreeScanner::with_resolver(FixedResolver, Utc::now());
        let entries = scanner.scan(temp.path()).unwrap();

        assert_eq!(entries[0].mimetype.as_deref(), Some("text/x-fixed"));
        assert_eq!(entries[1].mimetype, None);
    }

    #[test]
    fn test_rescan_differs_only_in_created() {
        let temp = create_test_tree();
        let first = TreeScanner::new(Utc::now()).scan(temp.path()).unwrap();
        let second = TreeScanner::new(Utc::now()).scan(temp.path()).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.path, b.path);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.size, b.size);
            assert_eq!(a.mimetype, b.mimetype);
            assert_eq!(a.last_modified, b.last_modified);
        }
    }

    #[test]
    fn test_missing_root_fails_with_path() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("nope");

        let scanner = TreeScanner::new(Utc::now());
        let err = scanner.scan(&gone).unwrap_err();
        assert!(matches!(err, IndexError::NotFound { .. }));
    }
}
