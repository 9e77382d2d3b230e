//! Workspace root discovery
//!
//! Walks up from a starting directory to the nearest directory that looks
//! like a workspace root.

use crate::config::{DEFAULT_MANIFEST, KOTLIN_MANIFEST, PROJECT_CONFIG_FILE};
use std::path::{Path, PathBuf};

/// Files whose presence marks a workspace root, in lookup order
pub const ROOT_MARKERS: &[&str] = &[PROJECT_CONFIG_FILE, DEFAULT_MANIFEST, KOTLIN_MANIFEST];

/// Find the workspace root containing `start_dir`
pub fn find_workspace_root(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        if is_workspace_root(current) {
            return Some(current.to_path_buf());
        }

        current = current.parent()?;
    }
}

/// Whether `dir` holds any of the [`ROOT_MARKERS`]
pub fn is_workspace_root(dir: &Path) -> bool {
    ROOT_MARKERS.iter().any(|marker| dir.join(marker).is_file())
}
