//! depswitch command-line tool
//!
//! Resolves dependency names against a workspace and prints whether each
//! one comes from a local module, a prebuilt library file, or a remote
//! artifact coordinate.

mod commands;
mod logging;
mod output;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use depswitch::{find_workspace_root, ConfigLayer, ConfigLoader, ModuleResolver};
use output::{resolve_color_choice, StyledOutput};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "depswitch")]
#[command(about = "Resolve dependencies to local workspace modules or remote artifacts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Workspace root (defaults to the nearest directory with settings.gradle or depswitch.toml)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Group identifier for synthesized coordinates
    #[arg(long, global = true)]
    group: Option<String>,

    /// Workspace subdirectory holding library modules
    #[arg(long, global = true)]
    library_dir: Option<String>,

    /// Artifact-type suffix for synthesized coordinates (e.g. "@aar")
    #[arg(long, global = true)]
    suffix: Option<String>,

    /// Log every resolution decision
    #[arg(short, long, global = true)]
    verbose: bool,

    /// When to use colors: auto, always, never
    #[arg(long, global = true)]
    color: Option<String>,
}

impl GlobalArgs {
    fn overrides(&self) -> ConfigLayer {
        ConfigLayer {
            group: self.group.clone(),
            library_dir: self.library_dir.clone(),
            artifact_suffix: self.suffix.clone(),
            verbose: self.verbose.then_some(true),
            ..ConfigLayer::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Workspace(WorkspaceCommand),

    /// Show the effective configuration
    Config,
}

/// Commands that read the workspace manifest and library directory
#[derive(Subcommand)]
enum WorkspaceCommand {
    /// Resolve module names to a local module or a remote coordinate
    Resolve {
        /// Module names (e.g. "Core" or ":Libraries:Core")
        #[arg(required = true)]
        names: Vec<String>,
        /// Remote coordinate to use if the module is not in the workspace
        #[arg(long)]
        coordinate: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Resolve a prebuilt library file by base name
    Artifact {
        /// Base name without extension (e.g. "foo" for libs/foo.jar)
        name: String,
        /// Remote coordinate to use if the file is not present
        #[arg(long)]
        coordinate: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the modules included by the workspace manifest
    Modules,

    /// List the prebuilt library files
    Artifacts,

    /// Print build declarations for modules and library files
    Declare {
        /// Module names
        names: Vec<String>,
        /// Build configuration (defaults to the configured default)
        #[arg(short, long)]
        configuration: Option<String>,
        /// Prebuilt library base names
        #[arg(long = "artifact")]
        artifacts: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let root = workspace_root(cli.global.root.as_deref())?;
    let config = ConfigLoader::new(&root)
        .with_overrides(cli.global.overrides())
        .load()
        .with_context(|| format!("Failed to load configuration for {}", root.display()))?;

    logging::init(config.verbose())?;
    tracing::debug!(root = %root.display(), group = config.group(), "Configuration loaded");

    let mut out = StyledOutput::new(resolve_color_choice(cli.global.color.as_deref()));

    match cli.command {
        Commands::Config => commands::config::execute(&root, &config, &mut out),
        Commands::Workspace(command) => {
            let resolver = ModuleResolver::for_workspace(config, &root);
            run(command, &resolver, &mut out)
        }
    }
}

fn run(command: WorkspaceCommand, resolver: &ModuleResolver, out: &mut StyledOutput) -> anyhow::Result<()> {
    match command {
        WorkspaceCommand::Resolve {
            names,
            coordinate,
            json,
        } => commands::resolve::execute(resolver, &names, coordinate.as_deref(), json, out),

        WorkspaceCommand::Artifact {
            name,
            coordinate,
            json,
        } => commands::artifact::execute(resolver, &name, coordinate.as_deref(), json, out),

        WorkspaceCommand::Modules => commands::modules::execute(resolver, out),

        WorkspaceCommand::Artifacts => commands::artifacts::execute(resolver, out),

        WorkspaceCommand::Declare {
            names,
            configuration,
            artifacts,
        } => commands::declare::execute(resolver, &names, &artifacts, configuration.as_deref(), out),
    }
}

/// Explicit `--root`, else the nearest enclosing workspace, else the current directory
fn workspace_root(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(find_workspace_root(&cwd).unwrap_or(cwd))
}
