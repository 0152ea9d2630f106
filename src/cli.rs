//! CLI argument parsing using clap v4
//!
//! Defines the command-line interface for the Personle terminal client.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::persona::Arcana;

/// Personle - Persona guessing game for the terminal
///
/// Guess the hidden persona from its level, arcana, stats, resistances,
/// and weaknesses. Play a free round, take on the shared daily challenge,
/// or browse the roster you'll be guessing from.
#[derive(Parser, Debug)]
#[command(name = "personle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a free round (random target, unlimited guesses)
    Play {
        /// Path to configuration file
        #[arg(short, long, env = "PERSONLE_CONFIG")]
        config: Option<String>,

        /// Dataset JSON file (defaults to the bundled roster)
        #[arg(long, env = "PERSONLE_DATASET")]
        dataset: Option<String>,

        /// Seed for target selection, for a reproducible round
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play the daily challenge (shared target, limited guesses)
    Daily {
        /// Path to configuration file
        #[arg(short, long, env = "PERSONLE_CONFIG")]
        config: Option<String>,

        /// Dataset JSON file (defaults to the bundled roster)
        #[arg(long, env = "PERSONLE_DATASET")]
        dataset: Option<String>,

        /// Play a specific day's round (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Browse the persona roster
    Compendium {
        /// Show one persona's full record instead of the listing
        name: Option<String>,

        /// Only list personas of this arcana
        #[arg(long)]
        arcana: Option<Arcana>,

        /// Path to configuration file
        #[arg(short, long, env = "PERSONLE_CONFIG")]
        config: Option<String>,

        /// Dataset JSON file (defaults to the bundled roster)
        #[arg(long, env = "PERSONLE_DATASET")]
        dataset: Option<String>,
    },

    /// Display version and build information
    Version,

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the current configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}
