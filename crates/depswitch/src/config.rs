//! Resolver configuration (depswitch.toml)
//!
//! Configuration is read once and frozen into a [`Config`]. Values come from
//! several layers, highest precedence first:
//!
//! 1. Explicit overrides (command-line flags)
//! 2. Environment variables (`DEPSWITCH_*`)
//! 3. Project file `depswitch.toml` in the workspace root
//! 4. Global file `<config dir>/depswitch/config.toml`
//! 5. Built-in defaults
//!
//! The group identifier has no default. A configuration without one is
//! rejected, since every remote coordinate built from it would be malformed.

use crate::coordinate::SUFFIX_MARKER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = "depswitch.toml";

/// Environment variable for the default group identifier
pub const ENV_GROUP: &str = "DEPSWITCH_GROUP";

/// Environment variable for the workspace library subdirectory
pub const ENV_LIBRARY_DIR: &str = "DEPSWITCH_LIBRARY_DIR";

/// Environment variable for the remote artifact suffix
pub const ENV_ARTIFACT_SUFFIX: &str = "DEPSWITCH_ARTIFACT_SUFFIX";

/// Environment variable for verbose resolution logging
pub const ENV_VERBOSE: &str = "DEPSWITCH_VERBOSE";

/// Default workspace subdirectory holding library modules
pub const DEFAULT_LIBRARY_DIR: &str = "Libraries";

/// Default workspace manifest, relative to the workspace root
pub const DEFAULT_MANIFEST: &str = "settings.gradle";

/// Manifest used by Kotlin-script workspaces when the default one is absent
pub const KOTLIN_MANIFEST: &str = "settings.gradle.kts";

/// Default directory of prebuilt binary artifacts, relative to the workspace root
pub const DEFAULT_LIBS_DIR: &str = "libs";

/// Default binary artifact extension
pub const DEFAULT_ARTIFACT_EXTENSION: &str = ".jar";

/// Default build configuration dependencies are attached to
pub const DEFAULT_CONFIGURATION: &str = "compile";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A mandatory value was not supplied by any layer
    #[error("Missing required configuration value `{key}` (set `{key}` in depswitch.toml or the {env} environment variable)")]
    MissingKey {
        key: &'static str,
        env: &'static str,
    },

    /// Failed to read a config file
    #[error("Failed to read config file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a config file
    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value was supplied but is unusable
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// One partially specified configuration layer
///
/// Every field is optional; [`ConfigLayer::merge`] fills gaps from a lower
/// precedence layer and [`ConfigLayer::into_config`] applies defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigLayer {
    /// Group identifier used for synthesized remote coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Workspace subdirectory that library modules live under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_dir: Option<String>,

    /// Artifact-type marker appended to synthesized coordinates (e.g. "@aar")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_suffix: Option<String>,

    /// Log every resolution decision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,

    /// Workspace manifest path, relative to the workspace root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,

    /// Prebuilt artifact directory, relative to the workspace root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub libs_dir: Option<String>,

    /// Extension of prebuilt artifacts (e.g. ".jar")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_extension: Option<String>,

    /// Build configuration used when none is named (e.g. "compile")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_configuration: Option<String>,
}

impl ConfigLayer {
    /// Parse a layer from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a layer from a string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Build a layer from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a layer from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let verbose = match lookup(ENV_VERBOSE) {
            Some(value) => Some(parse_flag(ENV_VERBOSE, &value)?),
            None => None,
        };

        Ok(Self {
            group: lookup(ENV_GROUP),
            library_dir: lookup(ENV_LIBRARY_DIR),
            artifact_suffix: lookup(ENV_ARTIFACT_SUFFIX),
            verbose,
            ..Self::default()
        })
    }

    /// Fill unset fields from a lower precedence layer
    pub fn merge(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            group: self.group.or(lower.group),
            library_dir: self.library_dir.or(lower.library_dir),
            artifact_suffix: self.artifact_suffix.or(lower.artifact_suffix),
            verbose: self.verbose.or(lower.verbose),
            manifest: self.manifest.or(lower.manifest),
            libs_dir: self.libs_dir.or(lower.libs_dir),
            artifact_extension: self.artifact_extension.or(lower.artifact_extension),
            default_configuration: self.default_configuration.or(lower.default_configuration),
        }
    }

    /// Apply defaults and validate
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let group = self
            .group
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .ok_or(ConfigError::MissingKey {
                key: "group",
                env: ENV_GROUP,
            })?;

        let mut config = Config::new(group)?;

        if let Some(dir) = self.library_dir {
            config = config.with_library_dir(&dir)?;
        }
        if let Some(suffix) = self.artifact_suffix {
            config = config.with_artifact_suffix(&suffix)?;
        }
        if let Some(verbose) = self.verbose {
            config = config.with_verbose(verbose);
        }
        if let Some(manifest) = self.manifest {
            config = config.with_manifest(manifest);
        }
        if let Some(libs_dir) = self.libs_dir {
            config = config.with_libs_dir(&libs_dir)?;
        }
        if let Some(extension) = self.artifact_extension {
            config = config.with_artifact_extension(&extension)?;
        }
        if let Some(configuration) = self.default_configuration {
            config = config.with_default_configuration(&configuration)?;
        }

        Ok(config)
    }
}

/// Frozen resolver configuration
///
/// Only constructible through validation, so a `Config` always carries a
/// usable group identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    group: String,
    library_dir: String,
    artifact_suffix: String,
    verbose: bool,
    manifest: PathBuf,
    libs_dir: String,
    artifact_extension: String,
    default_configuration: String,
}

impl Config {
    /// Create a configuration for `group` with every other value defaulted
    pub fn new(group: impl Into<String>) -> Result<Self, ConfigError> {
        let group = group.into();
        if group.trim().is_empty() {
            return Err(ConfigError::MissingKey {
                key: "group",
                env: ENV_GROUP,
            });
        }
        if group.contains(':') || group.contains(char::is_whitespace) {
            return Err(ConfigError::ValidationError(format!(
                "group '{}' must not contain ':' or whitespace",
                group
            )));
        }

        Ok(Self {
            group,
            library_dir: DEFAULT_LIBRARY_DIR.to_string(),
            artifact_suffix: String::new(),
            verbose: false,
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            libs_dir: DEFAULT_LIBS_DIR.to_string(),
            artifact_extension: DEFAULT_ARTIFACT_EXTENSION.to_string(),
            default_configuration: DEFAULT_CONFIGURATION.to_string(),
        })
    }

    /// Set the library subdirectory (surrounding ':' separators are dropped)
    pub fn with_library_dir(mut self, dir: &str) -> Result<Self, ConfigError> {
        let dir = dir.trim().trim_matches(':');
        if dir.is_empty() {
            return Err(ConfigError::ValidationError(
                "library-dir cannot be empty".to_string(),
            ));
        }
        self.library_dir = dir.to_string();
        Ok(self)
    }

    /// Set the artifact suffix appended to synthesized coordinates
    ///
    /// Either empty or `@` followed by a type tag such as `aar`.
    pub fn with_artifact_suffix(mut self, suffix: &str) -> Result<Self, ConfigError> {
        let suffix = suffix.trim();
        if !suffix.is_empty() {
            let tag = suffix.strip_prefix(SUFFIX_MARKER).unwrap_or_default();
            if tag.is_empty() || tag.contains([':', SUFFIX_MARKER]) || tag.contains(char::is_whitespace) {
                return Err(ConfigError::ValidationError(format!(
                    "artifact-suffix '{}' must be '@' followed by a type such as 'aar'",
                    suffix
                )));
            }
        }
        self.artifact_suffix = suffix.to_string();
        Ok(self)
    }

    /// Enable or disable resolution logging
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the workspace manifest path
    pub fn with_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.manifest = manifest.into();
        self
    }

    /// Set the prebuilt artifact directory (trailing '/' is dropped)
    pub fn with_libs_dir(mut self, libs_dir: &str) -> Result<Self, ConfigError> {
        let libs_dir = libs_dir.trim().trim_end_matches('/');
        if libs_dir.is_empty() {
            return Err(ConfigError::ValidationError(
                "libs-dir cannot be empty".to_string(),
            ));
        }
        self.libs_dir = libs_dir.to_string();
        Ok(self)
    }

    /// Set the prebuilt artifact extension ("jar" and ".jar" are equivalent)
    pub fn with_artifact_extension(mut self, extension: &str) -> Result<Self, ConfigError> {
        let extension = extension.trim().trim_start_matches('.');
        if extension.is_empty() {
            return Err(ConfigError::ValidationError(
                "artifact-extension cannot be empty".to_string(),
            ));
        }
        self.artifact_extension = format!(".{}", extension);
        Ok(self)
    }

    /// Set the build configuration used when none is named
    pub fn with_default_configuration(mut self, configuration: &str) -> Result<Self, ConfigError> {
        let configuration = configuration.trim();
        if configuration.is_empty() {
            return Err(ConfigError::ValidationError(
                "default-configuration cannot be empty".to_string(),
            ));
        }
        self.default_configuration = configuration.to_string();
        Ok(self)
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn library_dir(&self) -> &str {
        &self.library_dir
    }

    pub fn artifact_suffix(&self) -> &str {
        &self.artifact_suffix
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    pub fn libs_dir(&self) -> &str {
        &self.libs_dir
    }

    pub fn artifact_extension(&self) -> &str {
        &self.artifact_extension
    }

    pub fn default_configuration(&self) -> &str {
        &self.default_configuration
    }
}

/// Loads a [`Config`] for one workspace by stacking every layer
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Workspace root, where depswitch.toml is looked up
    root: PathBuf,

    /// Highest precedence layer
    overrides: ConfigLayer,

    /// Global config file, if any
    global_path: Option<PathBuf>,

    /// Whether to read `DEPSWITCH_*` variables
    use_env: bool,
}

impl ConfigLoader {
    /// Create a loader for the workspace at `root`
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            overrides: ConfigLayer::default(),
            global_path: global_config_path(),
            use_env: true,
        }
    }

    /// Set the override layer
    pub fn with_overrides(mut self, overrides: ConfigLayer) -> Self {
        self.overrides = overrides;
        self
    }

    /// Use a different global config file (or none)
    pub fn with_global_path(mut self, path: Option<PathBuf>) -> Self {
        self.global_path = path;
        self
    }

    /// Skip the environment layer
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Path of the project config file
    pub fn project_path(&self) -> PathBuf {
        self.root.join(PROJECT_CONFIG_FILE)
    }

    /// Stack all layers and validate the result
    pub fn load(&self) -> Result<Config, ConfigError> {
        let mut layer = self.overrides.clone();

        if self.use_env {
            layer = layer.merge(ConfigLayer::from_env()?);
        }

        let project_path = self.project_path();
        if project_path.is_file() {
            tracing::debug!(path = %project_path.display(), "Reading project config");
            layer = layer.merge(ConfigLayer::from_file(&project_path)?);
        }

        if let Some(global_path) = self.global_path.as_deref().filter(|p| p.is_file()) {
            tracing::debug!(path = %global_path.display(), "Reading global config");
            layer = layer.merge(ConfigLayer::from_file(global_path)?);
        }

        layer.into_config()
    }
}

/// Location of the per-user config file
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("depswitch").join("config.toml"))
}

/// Parse a boolean environment flag
fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::ValidationError(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
