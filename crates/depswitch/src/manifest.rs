//! Workspace manifest parsing (settings.gradle)
//!
//! Reconstructs the set of modules a workspace includes. This is a
//! best-effort line scanner, not a parser for the build language: any line
//! that does not look like an inclusion is skipped without complaint.
//!
//! ```text
//! include ':app', ':Libraries:Core'      → :app, :Libraries:Core
//! include(":Libraries:Net")              → :Libraries:Net
//! include ':a', // ':b'                  → :a
//! // include ':Libraries:Old'            → (nothing)
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Keyword that marks an inclusion line
pub const INCLUDE_KEYWORD: &str = "include";

/// Line-comment marker
pub const LINE_COMMENT: &str = "//";

/// Errors that can occur while reading a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file could not be read
    #[error("Failed to read workspace manifest {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Whether the manifest simply does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            ManifestError::IoError { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
        }
    }
}

/// Fully-qualified paths of the modules included in a workspace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceModules {
    modules: HashSet<String>,
}

impl WorkspaceModules {
    /// Parse manifest text
    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .flat_map(included_modules)
            .map(str::to_string)
            .collect()
    }

    /// Read and parse a manifest file
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Read a manifest file, treating an unreadable file as an empty workspace
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(modules) => modules,
            Err(e) => {
                tracing::warn!("{}; assuming no workspace modules", e);
                Self::default()
            }
        }
    }

    /// Check whether a fully-qualified module path is included
    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains(module)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(String::as_str)
    }

    /// Module paths in lexical order
    pub fn sorted(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = self.iter().collect();
        modules.sort_unstable();
        modules
    }
}

impl FromIterator<String> for WorkspaceModules {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            modules: iter.into_iter().collect(),
        }
    }
}

/// Module names contributed by one manifest line
fn included_modules(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    if trimmed.starts_with(LINE_COMMENT) {
        return Vec::new();
    }

    let Some(pos) = trimmed.find(INCLUDE_KEYWORD) else {
        return Vec::new();
    };

    trimmed[pos + INCLUDE_KEYWORD.len()..]
        .split(',')
        .filter_map(clean_token)
        .collect()
}

/// Strip quoting from one comma-separated token; `None` if nothing is left
fn clean_token(token: &str) -> Option<&str> {
    let token = token.trim();
    if token.starts_with(LINE_COMMENT) {
        return None;
    }

    // Trailing comment after the last name on the line
    let token = token.split(LINE_COMMENT).next().unwrap_or_default();

    let name = token.trim_matches(|c: char| {
        c == '\'' || c == '"' || c == '(' || c == ')' || c.is_whitespace()
    });

    (!name.is_empty()).then_some(name)
}
