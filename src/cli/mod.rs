mod clean;
mod plugin;
mod translate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::layout::ProjectLayout;
use crate::Result;

#[derive(Parser)]
#[command(name = "plugin-tasks")]
#[command(about = "Build chores for the Flow Launcher Python plugin template")]
#[command(version)]
pub struct Cli {
    /// Plugin template directory to operate on
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translation and localization commands
    #[command(subcommand)]
    Translate(TranslateCommands),

    /// Packaging commands
    #[command(subcommand)]
    Plugin(PluginCommands),

    /// Cleanup commands
    #[command(subcommand)]
    Clean(CleanCommands),
}

#[derive(Subcommand)]
pub enum TranslateCommands {
    /// Initialize a new language
    Init {
        /// Locale to create a catalog for (e.g. de_DE)
        locale: String,
    },

    /// Update all languages
    Update,

    /// Compile all languages
    Compile,
}

#[derive(Subcommand)]
pub enum PluginCommands {
    /// Install runtime dependencies into the vendored lib/ directory
    InstallDependencies,

    /// Install development-only dependencies
    SetupDevEnv,

    /// (Re)generate the plugin.json manifest
    GenPluginInfo,

    /// Pack the plugin into a zip archive under build/
    Build,
}

#[derive(Subcommand)]
pub enum CleanCommands {
    /// Remove build artifacts
    CleanBuild,

    /// Remove bytecode and editor-backup files
    CleanPyc,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let layout = ProjectLayout::new(self.project_dir);

        match self.command {
            Commands::Translate(cmd) => match cmd {
                TranslateCommands::Init { locale } => translate::init(&layout, &locale),
                TranslateCommands::Update => translate::update(&layout),
                TranslateCommands::Compile => translate::compile(&layout),
            },
            Commands::Plugin(cmd) => match cmd {
                PluginCommands::InstallDependencies => plugin::install_dependencies(&layout),
                PluginCommands::SetupDevEnv => plugin::setup_dev_env(&layout),
                PluginCommands::GenPluginInfo => plugin::gen_plugin_info(&layout),
                PluginCommands::Build => plugin::build(&layout),
            },
            Commands::Clean(cmd) => match cmd {
                CleanCommands::CleanBuild => clean::clean_build(&layout),
                CleanCommands::CleanPyc => clean::clean_pyc(&layout),
            },
        }
    }
}
