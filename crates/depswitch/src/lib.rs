//! depswitch: local-or-remote dependency resolution
//!
//! This crate decides, for a short module or library name, whether a build
//! should depend on a module of the current workspace or on a published
//! artifact:
//! - Workspace manifest scanning (settings.gradle)
//! - Local library directory scanning (libs/*.jar)
//! - Remote coordinate formatting (group:artifact:version[suffix])
//! - Module and artifact resolution
//! - Handing results to a dependency registrar
//! - Layered configuration (depswitch.toml)

pub mod artifacts;
pub mod config;
pub mod coordinate;
pub mod manifest;
pub mod path;
pub mod registrar;
pub mod resolver;

pub use artifacts::LocalArtifacts;
pub use config::{Config, ConfigError, ConfigLayer, ConfigLoader};
pub use coordinate::{build_remote_coordinate, Coordinate, CoordinateError, VersionSpec};
pub use manifest::{ManifestError, WorkspaceModules};
pub use path::find_workspace_root;
pub use registrar::{Declarer, DependencyList, DependencyRegistrar, Registration};
pub use resolver::{is_qualified, LocalKind, ModuleResolver, ResolvedDependency};
