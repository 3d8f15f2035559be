use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// unscaffold — post-scaffold cleanup for Composer-style manifests
#[derive(Parser, Debug)]
#[command(
    name = "unscaffold",
    version,
    about = "Clean scaffolding leftovers out of a project manifest",
    long_about = "After a create-project run, unscaffold strips the scaffolding hook and\n\
                  configuration out of the manifest, removes template-only dependencies,\n\
                  and asks the host package manager to re-resolve what was removed.",
    after_help = "EXAMPLES:\n  \
        unscaffold cleanup                      Full cleanup + delegated update\n  \
        unscaffold cleanup --skip-update        Edit the manifest only\n  \
        unscaffold cleanup --format json        Machine-readable report\n  \
        unscaffold remove-prop scripts.post-create-project-cmd\n  \
        unscaffold remove 'acme/*' --dev acme/dev-tools\n  \
        unscaffold remove-self                  Drop the helper's own package\n  \
        unscaffold completions zsh              Shell completion script"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the manifest to edit
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        default_value = "composer.json"
    )]
    pub manifest: PathBuf,

    /// Program to delegate the dependency update to
    #[arg(
        long,
        global = true,
        value_name = "PROGRAM",
        env = "UNSCAFFOLD_INSTALLER"
    )]
    pub installer: Option<String>,

    /// Path to an alternative self-descriptor
    #[arg(long, global = true, value_name = "PATH")]
    pub descriptor: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode — minimal output
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full post-create-project cleanup
    Cleanup {
        /// Edit the manifest but skip the delegated update
        #[arg(long)]
        skip_update: bool,
    },

    /// Remove one dot-addressed property from the manifest
    RemoveProp {
        /// Property path, e.g. scripts.post-create-project-cmd
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Remove dependency entries from the manifest
    Remove {
        /// Package names or glob patterns to remove from require
        #[arg(value_name = "PACKAGE")]
        packages: Vec<String>,

        /// Package names or glob patterns to remove from require-dev
        #[arg(long = "dev", value_name = "PACKAGE")]
        dev_packages: Vec<String>,
    },

    /// Remove the helper's own package from require
    RemoveSelf,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
    Quiet,
}
