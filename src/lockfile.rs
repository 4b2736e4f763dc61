//! Lockfile discovery and I/O errors
//!
//! Provides utilities for locating a lockfile, either directly in a
//! directory or by walking up the directory tree.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default lockfile name when none is configured
pub const DEFAULT_LOCKFILE_NAME: &str = "yarn.lock";

#[derive(Error, Debug)]
pub enum LockfileError {
    #[error("No {name} found in this directory or any parent directory")]
    NotFound { name: String },

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Find the nearest matching file by walking up from the current directory.
///
/// `filenames` are checked in order at each directory level.
pub fn find_nearest_file(filenames: &[&str]) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_nearest_file_from(&cwd, filenames)
}

/// Find the nearest matching file by walking up from a start directory.
///
/// `filenames` are checked in order at each directory level.
pub fn find_nearest_file_from(start: &Path, filenames: &[&str]) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        for filename in filenames {
            let path = dir.join(filename);
            if path.is_file() {
                return Some(path);
            }
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    None
}

/// Decide which lockfile to read.
///
/// An explicit path is returned untouched, even if it does not exist; the
/// open failure is reported by the parser. Otherwise `name` is looked up in
/// the current directory, or in the nearest ancestor when `search_parents`
/// is set.
pub fn resolve_lockfile_path(
    explicit: Option<&Path>,
    name: &str,
    search_parents: bool,
) -> Result<PathBuf, LockfileError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if search_parents {
        return find_nearest_file(&[name]).ok_or_else(|| LockfileError::NotFound {
            name: name.to_string(),
        });
    }

    Ok(PathBuf::from(name))
}
