//! Shared filesystem fixtures for the scenario tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Fresh directory for a single scenario; removed when the guard drops.
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Path of a (not yet created) file inside the scratch directory.
pub fn scratch_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
