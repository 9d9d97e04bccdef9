//! Snapshot file export/import.
//!
//! Files carry exactly the slot payload, with no extra framing.

use super::slot_repo::{RepoError, RepoResult};
use std::fs;
use std::path::Path;

/// Writes snapshot text to `path`, replacing any existing file.
pub fn write_snapshot_file(path: impl AsRef<Path>, contents: &str) -> RepoResult<()> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|source| RepoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads snapshot text from `path`.
pub fn read_snapshot_file(path: impl AsRef<Path>) -> RepoResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| RepoError::Io {
        path: path.to_path_buf(),
        source,
    })
}
