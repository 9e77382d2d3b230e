//! Remote artifact coordinates
//!
//! Coordinates have the form `group:artifact:version[suffix]`:
//!
//! ```text
//! com.example:Core:+            latest non-prerelease version
//! com.example:Core:1.2.+@aar    explicit version with an artifact-type suffix
//! ```
//!
//! The suffix is appended without a separating colon.

use crate::config::Config;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Version wildcard meaning "latest non-prerelease"
pub const LATEST_VERSION: &str = "+";

/// Marker that starts an artifact-type suffix
pub const SUFFIX_MARKER: char = '@';

/// Errors that can occur when parsing a coordinate
#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    /// Wrong number of ':' separated parts
    #[error("Invalid coordinate '{0}': expected group:artifact:version")]
    InvalidFormat(String),

    /// One of the parts is empty
    #[error("Invalid coordinate '{coordinate}': empty {part}")]
    EmptyPart {
        coordinate: String,
        part: &'static str,
    },
}

/// Version part of a coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionSpec {
    /// `+`
    Latest,

    /// Any explicit version string, including partial wildcards like `1.0.+`
    Exact(String),
}

impl VersionSpec {
    pub fn parse(version: &str) -> Self {
        if version == LATEST_VERSION {
            VersionSpec::Latest
        } else {
            VersionSpec::Exact(version.to_string())
        }
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSpec::Latest => f.write_str(LATEST_VERSION),
            VersionSpec::Exact(v) => f.write_str(v),
        }
    }
}

/// A remote artifact coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: VersionSpec,

    /// Artifact-type marker such as `@aar`, or empty
    pub suffix: String,
}

impl Coordinate {
    /// Coordinate that always resolves to the latest version
    pub fn latest(group: &str, artifact: &str, suffix: &str) -> Self {
        Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: VersionSpec::Latest,
            suffix: suffix.to_string(),
        }
    }

    /// Coordinate pinned to `version` (`+` is still treated as latest)
    pub fn with_version(
        group: &str,
        artifact: &str,
        version: &str,
        suffix: &str,
    ) -> Result<Self, CoordinateError> {
        let coordinate = Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: VersionSpec::parse(version),
            suffix: suffix.to_string(),
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Parse and validate a coordinate string
    pub fn parse(coordinate: &str) -> Result<Self, CoordinateError> {
        let parts: Vec<&str> = coordinate.split(':').collect();
        let [group, artifact, rest] = parts.as_slice() else {
            return Err(CoordinateError::InvalidFormat(coordinate.to_string()));
        };

        let (version, suffix) = match rest.find(SUFFIX_MARKER) {
            Some(pos) => rest.split_at(pos),
            None => (*rest, ""),
        };

        Self::with_version(group, artifact, version, suffix)
    }

    fn validate(&self) -> Result<(), CoordinateError> {
        let version = self.version.to_string();
        for (part, value) in [
            ("group", self.group.as_str()),
            ("artifact", self.artifact.as_str()),
            ("version", version.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(CoordinateError::EmptyPart {
                    coordinate: self.to_string(),
                    part,
                });
            }
            if value.contains(':') {
                return Err(CoordinateError::InvalidFormat(self.to_string()));
            }
        }

        if !self.suffix.is_empty() {
            match self.suffix.strip_prefix(SUFFIX_MARKER) {
                Some("") => {
                    return Err(CoordinateError::EmptyPart {
                        coordinate: self.to_string(),
                        part: "suffix",
                    })
                }
                Some(tag) if !tag.contains(':') => {}
                _ => return Err(CoordinateError::InvalidFormat(self.to_string())),
            }
        }

        Ok(())
    }

    /// Whether this coordinate floats to the latest version
    pub fn is_latest(&self) -> bool {
        self.version == VersionSpec::Latest
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}{}",
            self.group, self.artifact, self.version, self.suffix
        )
    }
}

/// Format the default remote coordinate for a module name
///
/// A fully-qualified name (`:Libraries:Core`) contributes only its last
/// non-empty segment as the artifact name, so `Core:` still yields `Core`.
pub fn build_remote_coordinate(name: &str, config: &Config) -> String {
    let artifact = name
        .rsplit(':')
        .find(|segment| !segment.trim().is_empty())
        .unwrap_or(name);
    Coordinate::latest(config.group(), artifact, config.artifact_suffix()).to_string()
}
