//! Dependency source resolution
//!
//! Decides whether a named dependency is satisfied by a module of the
//! current workspace or by a remote artifact. The workspace is inspected
//! once, when the resolver is built; every later call is a lookup in those
//! frozen sets and performs no I/O.

use crate::artifacts::LocalArtifacts;
use crate::config::{Config, DEFAULT_MANIFEST, KOTLIN_MANIFEST};
use crate::coordinate::{build_remote_coordinate, Coordinate, CoordinateError};
use crate::manifest::WorkspaceModules;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Separator between segments of a module path (`:Libraries:Core`)
pub const MODULE_SEPARATOR: char = ':';

/// What kind of local reference a dependency resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalKind {
    /// A module of the workspace, rebuilt as part of the same build
    Module,

    /// A prebuilt artifact file in the library directory
    File,
}

/// Where a dependency comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum ResolvedDependency {
    /// Local module path or artifact file path
    Local { path: String, kind: LocalKind },

    /// Remote artifact coordinate (may be empty when none was supplied)
    Remote { coordinate: String },
}

impl ResolvedDependency {
    pub fn is_local(&self) -> bool {
        matches!(self, ResolvedDependency::Local { .. })
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ResolvedDependency::Remote { .. })
    }

    /// The module path, file path or coordinate
    pub fn reference(&self) -> &str {
        match self {
            ResolvedDependency::Local { path, .. } => path,
            ResolvedDependency::Remote { coordinate } => coordinate,
        }
    }

    /// "local" or "remote"
    pub fn source(&self) -> &'static str {
        match self {
            ResolvedDependency::Local { .. } => "local",
            ResolvedDependency::Remote { .. } => "remote",
        }
    }
}

impl fmt::Display for ResolvedDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reference())
    }
}

/// Resolves dependency names against one workspace snapshot
#[derive(Debug, Clone)]
pub struct ModuleResolver {
    /// Frozen configuration
    config: Config,

    /// Modules included by the workspace manifest
    modules: WorkspaceModules,

    /// Prebuilt artifacts in the library directory
    artifacts: LocalArtifacts,
}

impl ModuleResolver {
    /// Scan a workspace manifest and library directory
    ///
    /// A missing manifest or directory is not an error: it contributes no
    /// entries, and every lookup against it falls through to remote.
    pub fn new(config: Config, manifest_path: &Path, libs_path: &Path) -> Self {
        let modules = match WorkspaceModules::from_file(manifest_path) {
            Ok(modules) => modules,
            Err(e) => {
                if config.verbose() {
                    tracing::warn!("{}; all modules will resolve remotely", e);
                } else {
                    tracing::debug!("{}", e);
                }
                WorkspaceModules::default()
            }
        };

        let artifacts = match LocalArtifacts::read(libs_path, config.artifact_extension()) {
            Ok(artifacts) => artifacts,
            Err(e) => {
                if config.verbose() {
                    tracing::warn!(
                        "Cannot list library directory {}: {}; all artifacts will resolve remotely",
                        libs_path.display(),
                        e
                    );
                } else {
                    tracing::debug!(dir = %libs_path.display(), error = %e, "No local artifacts");
                }
                LocalArtifacts::default()
            }
        };

        tracing::debug!(
            modules = modules.len(),
            artifacts = artifacts.len(),
            "Workspace scanned"
        );

        Self::from_parts(config, modules, artifacts)
    }

    /// Scan the manifest and library directory named by `config`, relative to `root`
    ///
    /// With the default manifest setting, a workspace that only has
    /// `settings.gradle.kts` is read from that file instead.
    pub fn for_workspace(config: Config, root: &Path) -> Self {
        let mut manifest_path = root.join(config.manifest());
        if config.manifest() == Path::new(DEFAULT_MANIFEST) && !manifest_path.is_file() {
            let kotlin = root.join(KOTLIN_MANIFEST);
            if kotlin.is_file() {
                manifest_path = kotlin;
            }
        }
        let libs_path = root.join(config.libs_dir());
        Self::new(config, &manifest_path, &libs_path)
    }

    /// Build a resolver from already computed sets
    pub fn from_parts(config: Config, modules: WorkspaceModules, artifacts: LocalArtifacts) -> Self {
        Self {
            config,
            modules,
            artifacts,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn modules(&self) -> &WorkspaceModules {
        &self.modules
    }

    pub fn artifacts(&self) -> &LocalArtifacts {
        &self.artifacts
    }

    /// Fully-qualified module path for `name`
    ///
    /// `Core` becomes `:Libraries:Core`; names that already contain a
    /// separator are returned unchanged.
    pub fn qualify(&self, name: &str) -> String {
        if is_qualified(name) {
            name.to_string()
        } else {
            format!(
                "{sep}{}{sep}{}",
                self.config.library_dir(),
                name,
                sep = MODULE_SEPARATOR
            )
        }
    }

    /// Resolve a module name
    ///
    /// A module included by the workspace always resolves locally, even if
    /// an explicit coordinate is given. Otherwise the explicit coordinate is
    /// used, or one is synthesized from the configured group and suffix.
    pub fn resolve_module(&self, name: &str, coordinate: Option<&str>) -> ResolvedDependency {
        let resolved = self.local_module(name).unwrap_or_else(|| ResolvedDependency::Remote {
            coordinate: match coordinate {
                Some(c) => c.to_string(),
                None => build_remote_coordinate(name, &self.config),
            },
        });

        self.report(name, &resolved);
        resolved
    }

    /// Resolve a module whose remote artifact is published under a
    /// different group, artifact name or version
    pub fn resolve_module_as(
        &self,
        name: &str,
        group: &str,
        artifact: &str,
        version: &str,
    ) -> Result<ResolvedDependency, CoordinateError> {
        let coordinate =
            Coordinate::with_version(group, artifact, version, self.config.artifact_suffix())?
                .to_string();
        Ok(self.resolve_module(name, Some(&coordinate)))
    }

    /// Resolve several module names independently, in input order
    pub fn resolve_modules<'a, I>(&self, names: I) -> Vec<ResolvedDependency>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .map(|name| self.resolve_module(name, None))
            .collect()
    }

    /// Resolve a prebuilt artifact by base name (without extension)
    ///
    /// Falls back to the explicit coordinate, or to an empty coordinate
    /// when none is given.
    pub fn resolve_artifact(&self, base_name: &str, coordinate: Option<&str>) -> ResolvedDependency {
        let file_name = format!("{}{}", base_name, self.config.artifact_extension());

        let resolved = if self.artifacts.contains(&file_name) {
            ResolvedDependency::Local {
                path: format!("{}/{}", self.config.libs_dir(), file_name),
                kind: LocalKind::File,
            }
        } else {
            ResolvedDependency::Remote {
                coordinate: coordinate.unwrap_or_default().to_string(),
            }
        };

        self.report(base_name, &resolved);
        resolved
    }

    fn local_module(&self, name: &str) -> Option<ResolvedDependency> {
        let qualified = self.qualify(name);
        self.modules
            .contains(&qualified)
            .then_some(ResolvedDependency::Local {
                path: qualified,
                kind: LocalKind::Module,
            })
    }

    fn report(&self, name: &str, resolved: &ResolvedDependency) {
        if self.config.verbose() {
            tracing::info!(
                dependency = name,
                source = resolved.source(),
                reference = resolved.reference(),
                "Resolved dependency"
            );
        } else {
            tracing::debug!(
                dependency = name,
                source = resolved.source(),
                reference = resolved.reference(),
                "Resolved dependency"
            );
        }
    }
}

/// Whether a module name is already a module path
pub fn is_qualified(name: &str) -> bool {
    name.contains(MODULE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(manifest: &str, jars: &[&str]) -> ModuleResolver {
        let config = Config::new("com.example").unwrap();
        ModuleResolver::from_parts(
            config,
            WorkspaceModules::parse(manifest),
            jars.iter().map(|j| j.to_string()).collect(),
        )
    }

    #[test]
    fn test_qualify() {
        let resolver = resolver("", &[]);
        assert_eq!(resolver.qualify("Core"), ":Libraries:Core");
        assert_eq!(resolver.qualify(":app"), ":app");
        assert_eq!(resolver.qualify(":Libraries:Core"), ":Libraries:Core");
    }

    #[test]
    fn test_workspace_module_resolves_locally() {
        let resolver = resolver("include ':Libraries:Core'", &[]);
        assert_eq!(
            resolver.resolve_module("Core", None),
            ResolvedDependency::Local {
                path: ":Libraries:Core".to_string(),
                kind: LocalKind::Module,
            }
        );
    }

    #[test]
    fn test_unknown_module_resolves_remotely() {
        let resolver = resolver("include ':Libraries:Core'", &[]);
        assert_eq!(
            resolver.resolve_module("Net", None),
            ResolvedDependency::Remote {
                coordinate: "com.example:Net:+".to_string(),
            }
        );
    }

    #[test]
    fn test_local_wins_over_explicit_coordinate() {
        let resolver = resolver("include ':Libraries:Core'", &[]);
        let resolved = resolver.resolve_module("Core", Some("com.other:Core:2.0"));
        assert!(resolved.is_local());
    }

    #[test]
    fn test_explicit_coordinate_used_when_remote() {
        let resolver = resolver("", &[]);
        let resolved = resolver.resolve_module("Core", Some("com.other:core:2.0"));
        assert_eq!(resolved.reference(), "com.other:core:2.0");
    }

    #[test]
    fn test_resolve_module_as() {
        let resolver = resolver("", &[]);
        let resolved = resolver
            .resolve_module_as("Core", "com.other", "core-lib", "1.0.+")
            .unwrap();
        assert_eq!(resolved.reference(), "com.other:core-lib:1.0.+");

        let resolver = self::resolver("include ':Libraries:Core'", &[]);
        let resolved = resolver
            .resolve_module_as("Core", "com.other", "core-lib", "1.0.+")
            .unwrap();
        assert_eq!(resolved.reference(), ":Libraries:Core");
    }

    #[test]
    fn test_resolve_module_as_rejects_empty_parts() {
        let resolver = resolver("", &[]);
        assert!(resolver.resolve_module_as("Core", "", "core-lib", "1.0").is_err());
        assert!(resolver.resolve_module_as("Core", "com.other", "", "1.0").is_err());
        assert!(resolver.resolve_module_as("Core", "com.other", "core-lib", "").is_err());
    }

    #[test]
    fn test_artifact_local_and_remote() {
        let resolver = resolver("", &["foo.jar"]);
        assert_eq!(
            resolver.resolve_artifact("foo", None),
            ResolvedDependency::Local {
                path: "libs/foo.jar".to_string(),
                kind: LocalKind::File,
            }
        );
        assert_eq!(
            resolver.resolve_artifact("bar", None),
            ResolvedDependency::Remote {
                coordinate: String::new(),
            }
        );
    }

    #[test]
    fn test_display_is_reference() {
        let resolver = resolver("", &[]);
        assert_eq!(
            resolver.resolve_module("Core", None).to_string(),
            "com.example:Core:+"
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let dep = ResolvedDependency::Local {
            path: ":app".to_string(),
            kind: LocalKind::Module,
        };
        let json = serde_json::to_value(&dep).unwrap();
        assert_eq!(json["source"], "local");
        assert_eq!(json["kind"], "module");
        assert_eq!(json["path"], ":app");
    }
}
