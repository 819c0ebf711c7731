//! cloudbio - command-line front-end for provisioning editions.

use anyhow::{Context, Result};
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use cloudbio_editions::cli::{Cli, Commands};
use cloudbio_editions::logic::postinstall::default_scripts_dir;
use cloudbio_editions::logic::upgrade::run_upgrade;
use cloudbio_editions::{
    plan_edition, process_guard, select_edition, DryRunExecutor, EditionKind, Environment,
    PlanInputs, PrivilegedExecutor, ProcessGuard, ScriptPostInstall, SudoExecutor,
};

/// Initialize logging; `RUST_LOG` overrides the default level.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_environment(path: &Path) -> Result<Environment> {
    info!("Loading environment from: {:?}", path);
    let env = Environment::load_from_file(path)
        .with_context(|| format!("Failed to load environment from {:?}", path))?;
    env.validate()
        .with_context(|| format!("Invalid environment in {:?}", path))?;
    Ok(env)
}

fn main() {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed: {:?}", cli);

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Err(e) = process_guard::init_signal_handlers() {
        warn!("Failed to initialize signal handlers: {}", e);
    }
    let _guard = ProcessGuard::new();

    let dry_run_executor = DryRunExecutor::new();
    let sudo_executor = SudoExecutor::new();
    let executor: &dyn PrivilegedExecutor = if cli.dry_run {
        &dry_run_executor
    } else {
        &sudo_executor
    };

    match cli.command {
        Commands::List => {
            for kind in EditionKind::iter() {
                println!(
                    "{:<14} {:<22} {}",
                    kind.short_name(),
                    kind.display_name(),
                    kind.description()
                );
            }
        }
        Commands::Validate { config, edition } => {
            let env = load_environment(&config)?;
            if let Some(name) = edition {
                let edition = select_edition(&name, &env)?;
                println!(
                    "✓ {} {} accepts {} {}",
                    edition.name(),
                    edition.version(),
                    env.distribution,
                    env.dist_name
                );
            } else {
                println!("✓ Environment file is valid: {:?}", config);
            }
        }
        Commands::Plan {
            config,
            edition,
            category,
            items,
        } => {
            let env = load_environment(&config)?;
            let edition = select_edition(&edition, &env)?;
            let inputs = PlanInputs {
                config_items: category.map(|c| (c, items)),
                ..PlanInputs::default()
            };
            print!("{}", plan_edition(edition.as_ref(), inputs).render());
        }
        Commands::Upgrade {
            config,
            edition,
            sources,
        } => {
            let env = load_environment(&config)?;
            let edition = select_edition(&edition, &env)?;
            info!("Running upgrade hooks for {}", edition.name());
            run_upgrade(edition.as_ref(), executor, sources)?;
            println!("✓ Upgrade hooks completed for {}", edition.name());
        }
        Commands::PostInstall {
            config,
            edition,
            packages,
            scripts_dir,
        } => {
            let env = load_environment(&config)?;
            let edition = select_edition(&edition, &env)?;
            let scripts_dir = scripts_dir.unwrap_or_else(default_scripts_dir);
            let actions = ScriptPostInstall::new(executor, scripts_dir);
            info!("Running post-install hook for {}", edition.name());
            edition.post_install(&actions, packages.as_deref())?;
            println!("✓ Post-install completed for {}", edition.name());
        }
    }

    if cli.dry_run {
        let commands = dry_run_executor.commands();
        if commands.is_empty() {
            println!("[dry-run] no privileged commands");
        }
        for command in commands {
            println!("[dry-run] {}", command);
        }
    }

    Ok(())
}
