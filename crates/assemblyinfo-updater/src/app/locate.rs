//! Locating `AssemblyInfo.cs` files under a root directory.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::errors::UpdaterError;
use crate::domain::model::METADATA_FILE_NAME;

/// Walk `root` and collect every file named `AssemblyInfo.cs`.
///
/// With `recursive` unset only the immediate children of `root` are inspected.
/// Hidden and ignored directories are walked like any other. Siblings are
/// visited in file-name order so the result is stable for a given tree.
///
/// The first traversal error aborts the walk; no existence check is made up
/// front, so a missing `root` surfaces as [`UpdaterError::Filesystem`].
pub fn find_metadata_files(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, UpdaterError> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .max_depth(if recursive { None } else { Some(1) })
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = result.map_err(|source| UpdaterError::Filesystem {
            path: root.to_path_buf(),
            source,
        })?;

        let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
        if is_file && is_metadata_file_name(entry.file_name()) {
            tracing::debug!(path = %entry.path().display(), "found metadata file");
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Windows and macOS volumes are case-insensitive by default.
#[cfg(any(windows, target_os = "macos"))]
fn is_metadata_file_name(name: &OsStr) -> bool {
    name.to_str()
        .is_some_and(|name| name.eq_ignore_ascii_case(METADATA_FILE_NAME))
}

#[cfg(not(any(windows, target_os = "macos")))]
fn is_metadata_file_name(name: &OsStr) -> bool {
    name == METADATA_FILE_NAME
}
