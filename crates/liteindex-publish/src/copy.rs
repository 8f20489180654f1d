//! Recursive tree copy into the published `files/` directory.

use std::fs;
use std::path::Path;

use filetime::FileTime;

use liteindex_core::IndexError;

/// Copy the visible contents of `source` into `dest`, merging into any
/// existing destination subdirectories. Hidden entries are skipped at
/// every level. Returns the number of files copied.
pub(crate) fn copy_tree(source: &Path, dest: &Path) -> Result<u64, IndexError> {
    fs::create_dir_all(dest).map_err(|e| IndexError::io(dest, e))?;

    let mut copied = 0u64;
    for child in fs::read_dir(source).map_err(|e| IndexError::io(source, e))? {
        let child = child.map_err(|e| IndexError::io(source, e))?;
        let name = child.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let path = child.path();
        let dest_path = dest.join(&name);
        if path.is_dir() {
            copied += copy_tree(&path, &dest_path)?;
        } else {
            copy_file(&path, &dest_path)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Copy a single file, preserving permissions and modification time.
fn copy_file(source: &Path, dest: &Path) -> Result<(), IndexError> {
    let metadata = fs::metadata(source).map_err(|e| IndexError::io(source, e))?;

    fs::copy(source, dest).map_err(|e| IndexError::io(source, e))?;

    let mtime = metadata.modified().map_err(|e| IndexError::io(source, e))?;
    filetime::set_file_mtime(dest, FileTime::from_system_time(mtime))
        .map_err(|e| IndexError::io(dest, e))?;

    Ok(())
}
