//! Output directory reset.

use std::path::Path;

use crate::error::{ConvertError, ConvertResult};

/// Delete every file directly inside `dir`.
///
/// Subdirectories and their contents are left alone, as are symlinks that
/// resolve to a directory. Other symlinks are removed, never their targets.
/// The first entry that cannot be listed or removed aborts the reset.
///
/// Returns the number of files removed.
pub fn clear(dir: &Path) -> ConvertResult<usize> {
    let entries = std::fs::read_dir(dir).map_err(|e| ConvertError::io(dir, e))?;
    let mut removed = 0;

    for entry in entries {
        let entry = entry.map_err(|e| ConvertError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| ConvertError::io(&path, e))?;

        if file_type.is_dir() || (file_type.is_symlink() && path.is_dir()) {
            continue;
        }

        std::fs::remove_file(&path).map_err(|e| ConvertError::io(&path, e))?;
        log::debug!("Removed {}", path.display());
        removed += 1;
    }

    Ok(removed)
}
