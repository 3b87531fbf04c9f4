//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod characters;
mod describe;
mod episodes;
mod helpers;
mod quote;
mod version;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::load_settings;
use crate::selection::QuoteRequest;

#[derive(Parser)]
#[command(name = "futurama")]
#[command(about = "Get random Futurama quotes (powered by WikiQuote)")]
#[command(long_about = "The futurama CLI tool retrieves random quotes from WikiQuote and
plot synopses of episodes from Wikipedia.

Quotes can be retrieved from:
  - a random episode in a random season
  - a random episode in a user-defined season
  - a user-defined episode
  - a random episode in a random season from a user-defined character")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Get a quote, or list episodes and characters
    Get {
        #[command(subcommand)]
        command: GetCommands,
    },

    /// Describe a Futurama episode (powered by Wikipedia)
    Describe {
        #[command(subcommand)]
        command: DescribeCommands,
    },

    /// Display the version for Futurama CLI
    Version,
}

#[derive(Subcommand)]
enum GetCommands {
    /// Get random Futurama quote
    #[command(after_help = "Examples:
  futurama get quote                      (randomized season and episode)
  futurama get quote --season 2
  futurama get quote --episode \"Space Pilot 3000\"
  futurama get quote --character \"Fry\"
  futurama get quote --all --episode \"The Series Has Landed\"")]
    Quote {
        /// Season number (1-7)
        #[arg(short, long, conflicts_with_all = ["episode", "all", "character"])]
        season: Option<u32>,
        /// Episode name (use 'futurama get episodes' for assistance)
        #[arg(short, long)]
        episode: Option<String>,
        /// Character name (e.g. 'Fry', 'Bender')
        #[arg(short, long, conflicts_with_all = ["all", "episode"])]
        character: Option<String>,
        /// Return all quotes from an episode (requires --episode)
        #[arg(short, long)]
        all: bool,
    },

    /// Get list of episodes from series or season
    Episodes {
        /// Show episodes from all seasons (default)
        #[arg(short, long, conflicts_with = "season")]
        all: bool,
        /// Season number (1-7)
        #[arg(short, long)]
        season: Option<u32>,
    },

    /// Get list of valid characters for the 'get quote' command
    Characters,
}

#[derive(Subcommand)]
enum DescribeCommands {
    /// Describe the plot of a given Futurama episode
    Episode {
        /// Episode name (use 'futurama get episodes' for assistance)
        #[arg(short, long)]
        name: String,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Get { command } => match command {
            GetCommands::Quote {
                season,
                episode,
                character,
                all,
            } => {
                let settings = load_settings(cli.config.as_deref())?;
                let request = QuoteRequest {
                    season,
                    episode,
                    character,
                    all,
                };
                quote::cmd_quote(&settings, &request).await
            }
            GetCommands::Episodes { all: _, season } => episodes::cmd_episodes(season),
            GetCommands::Characters => characters::cmd_characters(),
        },
        Commands::Describe { command } => match command {
            DescribeCommands::Episode { name } => {
                let settings = load_settings(cli.config.as_deref())?;
                describe::cmd_describe_episode(&settings, &name).await
            }
        },
        Commands::Version => version::cmd_version(),
    }
}
