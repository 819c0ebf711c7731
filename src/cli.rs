use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cloudbio - provisioning editions for CloudBioLinux builds
#[derive(Parser, Debug)]
#[command(name = "cloudbio")]
#[command(about = "Inspect and run CloudBioLinux edition hooks")]
#[command(version)]
pub struct Cli {
    /// Dry-run mode: print privileged commands instead of running them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable debug logging (RUST_LOG still takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available editions
    List,
    /// Validate an environment file, optionally against an edition
    Validate {
        /// Path to the environment JSON file
        #[arg(short, long)]
        config: PathBuf,
        /// Edition short name to construct
        #[arg(short, long)]
        edition: Option<String>,
    },
    /// Preview every apt and config rewrite of an edition
    Plan {
        /// Path to the environment JSON file
        #[arg(short, long)]
        config: PathBuf,
        /// Edition short name
        #[arg(short, long, default_value = "biolinux")]
        edition: String,
        /// Config item category to preview (e.g. packages, minimal)
        #[arg(long)]
        category: Option<String>,
        /// Comma-separated starting items for the category
        #[arg(long, value_delimiter = ',', requires = "category")]
        items: Vec<String>,
    },
    /// Reset and rewrite the package source file, then upgrade the system
    Upgrade {
        /// Path to the environment JSON file
        #[arg(short, long)]
        config: PathBuf,
        /// Edition short name
        #[arg(short, long, default_value = "biolinux")]
        edition: String,
        /// Candidate repository line handed to the edition (repeatable)
        #[arg(long = "source")]
        sources: Vec<String>,
    },
    /// Run the edition's post-install hook
    PostInstall {
        /// Path to the environment JSON file
        #[arg(short, long)]
        config: PathBuf,
        /// Edition short name
        #[arg(short, long, default_value = "biolinux")]
        edition: String,
        /// Comma-separated list of installed packages
        #[arg(long, value_delimiter = ',')]
        packages: Option<Vec<String>>,
        /// Helper scripts directory (default: $CLOUDBIO_SCRIPTS_DIR or ./scripts)
        #[arg(long)]
        scripts_dir: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
