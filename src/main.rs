//! Personle terminal client.
//!
//! Thin front end over the personle library: parses the CLI, loads
//! configuration and the persona roster, and dispatches to the game
//! modes.

use clap::Parser;
use tracing::info;

use personle::cli::{Cli, Commands, ConfigSubcommand};
use personle::config::{self, GameConfig};
use personle::error::Result;
use personle::logging::{self, LogGuards};
use personle::persona::PersonaStore;
use personle::{play, version};

fn main() {
    // Parse CLI arguments first (before logging, so we know verbosity)
    let cli = Cli::parse();

    // Commands that need neither config nor the full logging stack
    match &cli.command {
        Commands::Version => {
            version::print_version();
            return;
        }
        Commands::Config { subcommand } => {
            let result = logging::init_simple(tracing::Level::WARN)
                .and_then(|_| handle_config_command(subcommand.clone()));
            if let Err(e) = result {
                eprint!("{}", e.format_for_terminal());
                std::process::exit(e.exit_code());
            }
            return;
        }
        _ => {}
    }

    let config_path = match &cli.command {
        Commands::Play { config, .. }
        | Commands::Daily { config, .. }
        | Commands::Compendium { config, .. } => config.clone(),
        _ => None,
    };

    // Load config (or use defaults)
    let config = match GameConfig::load(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprint!("{}", e.format_for_terminal());
            std::process::exit(e.exit_code());
        }
    };

    // The guards must be kept alive for the lifetime of the program
    let _log_guards = match init_logging_from_config(&config, cli.verbose, cli.quiet) {
        Ok(guards) => guards,
        Err(e) => {
            eprint!("{}", e.format_for_terminal());
            std::process::exit(e.exit_code());
        }
    };

    let build = version::build_info();
    info!(
        version = %build.full_version(),
        target = %build.target,
        "Starting personle"
    );

    // Dataset load failures land in the same handler as game errors.
    let result = match cli.command {
        Commands::Play { dataset, seed, .. } => load_store(dataset.as_deref(), &config)
            .and_then(|store| play::run_free_play(&store, seed)),
        Commands::Daily { dataset, date, .. } => load_store(dataset.as_deref(), &config)
            .and_then(|store| play::run_daily(&store, date, config.game.daily_guess_limit)),
        Commands::Compendium {
            name,
            arcana,
            dataset,
            ..
        } => load_store(dataset.as_deref(), &config)
            .and_then(|store| play::run_compendium(&store, name.as_deref(), arcana)),
        Commands::Version | Commands::Config { .. } => {
            // Already handled above
            unreachable!();
        }
    };

    if let Err(e) = result {
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

/// Initialize logging from configuration
fn init_logging_from_config(config: &GameConfig, verbose: u8, quiet: bool) -> Result<LogGuards> {
    logging::init_logging(&config.logging, verbose, quiet)
}

/// Load the persona roster: an explicit `--dataset` wins, then the config
/// file's dataset path, then the bundled roster.
fn load_store(cli_dataset: Option<&str>, config: &GameConfig) -> Result<PersonaStore> {
    if let Some(path) = cli_dataset {
        let expanded = shellexpand::tilde(path).to_string();
        return PersonaStore::from_path(expanded);
    }
    if let Some(path) = config.dataset_path() {
        return PersonaStore::from_path(path);
    }
    PersonaStore::bundled()
}

/// Handle configuration subcommands
fn handle_config_command(subcommand: ConfigSubcommand) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show { config } => {
            let cfg = GameConfig::load(config.as_deref())?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            config::init_config(path.as_deref(), force)?;
        }
        ConfigSubcommand::Validate { config } => {
            GameConfig::load(config.as_deref())?;
            println!("Configuration is valid.");
        }
    }

    Ok(())
}
