//! Local library directory scanning
//!
//! Lists the prebuilt binary artifacts (e.g. `libs/*.jar`) available in the
//! workspace. Only the immediate entries of the directory are considered.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// File names of the prebuilt artifacts found in a library directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalArtifacts {
    files: HashSet<String>,
}

impl LocalArtifacts {
    /// List `dir`, keeping regular files whose name ends with `extension`
    pub fn read(dir: &Path, extension: &str) -> std::io::Result<Self> {
        let mut files = HashSet::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;

            // Follows symlinks, so a linked jar still counts
            if !entry.path().is_file() {
                continue;
            }

            // Non UTF-8 names can never match a requested artifact
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };

            if name.ends_with(extension) {
                files.insert(name);
            }
        }

        Ok(Self { files })
    }

    /// Like [`LocalArtifacts::read`], but an absent or unreadable directory
    /// yields an empty set
    pub fn scan(dir: &Path, extension: &str) -> Self {
        match Self::read(dir, extension) {
            Ok(artifacts) => artifacts,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "No local artifacts");
                Self::default()
            }
        }
    }

    /// Check whether a file name (with extension) is present
    pub fn contains(&self, file_name: &str) -> bool {
        self.files.contains(file_name)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    /// File names in lexical order
    pub fn sorted(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.iter().collect();
        files.sort_unstable();
        files
    }
}

impl FromIterator<String> for LocalArtifacts {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}
