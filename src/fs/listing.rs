//! Existence checks and directory listing.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Check that `path` is non-empty and names an existing regular file.
pub fn is_file(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_file()
}

/// Check that `path` is non-empty and names an existing directory.
pub fn is_directory(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_dir()
}

/// List the entry stems of a directory, sorted ascending.
///
/// Entries whose stem starts with `.` or `__` are skipped. Returns `None` when
/// `directory_path` is not a directory, so an empty directory (`Some(vec![])`)
/// stays distinguishable from a missing one.
pub fn list_directory(directory_path: &Path) -> Result<Option<Vec<String>>> {
    if !is_directory(directory_path) {
        return Ok(None);
    }

    let mut stems = Vec::new();
    for entry in fs::read_dir(directory_path)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let stem = Path::new(&file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        if stem.starts_with('.') || stem.starts_with("__") {
            continue;
        }
        stems.push(stem);
    }

    stems.sort();
    Ok(Some(stems))
}
