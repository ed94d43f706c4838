//! # Cleanhammer - Fantasy roster keeper
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads: AppConfig (cleanhammer.json)                      │
//! │    ├── Creates: InMemoryRoster or JsonFileRoster (adapter)     │
//! │    └── Runs: one command through the use cases                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   cleanhammer create --name Grok --race greenskin --subrace Orc
//!   cleanhammer list
//!   cleanhammer sell --seller Elrin --buyer Karl --item "Ring of Ashes:ring:50"
//!   cleanhammer befriend --name Karl --friend Elrin --mutual
//!   cleanhammer dismiss --name Grok
//!   cleanhammer demo

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cleanhammer_adapter::{InMemoryRoster, JsonFileRoster};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::{BefriendCommand, CreateCommand, DismissCommand, Roster, SellCommand};
use config::{AppConfig, StoreKind};

#[derive(Parser)]
#[command(name = "cleanhammer")]
#[command(about = "Cleanhammer - Keep a roster of heroes, their gold and their friends")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Roster document, overrides the configured path
    #[arg(long, global = true)]
    roster: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recruit a new character
    Create(CreateCommand),
    /// Show every character on the roster
    List,
    /// Send a character away
    Dismiss(DismissCommand),
    /// Sell an item between two characters
    Sell(SellCommand),
    /// Record a friendship between two characters
    Befriend(BefriendCommand),
    /// Run a scripted walkthrough on a throwaway in-memory roster
    Demo,
}

impl Commands {
    async fn run<R: Roster>(self, roster: R) -> anyhow::Result<()> {
        match self {
            Commands::Create(cmd) => cmd.run(roster).await.map(|_| ()),
            Commands::List => commands::list::run(roster).await.map(|_| ()),
            Commands::Dismiss(cmd) => cmd.run(roster).await,
            Commands::Sell(cmd) => cmd.run(roster).await,
            Commands::Befriend(cmd) => cmd.run(roster).await,
            Commands::Demo => commands::demo::run(roster).await,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.roster {
        config.roster_path = path;
    }

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?config, "Configuration loaded");

    // ========================================
    // Dependency Injection - Wire up the adapter
    // ========================================

    match (cli.command, config.store) {
        (command @ Commands::Demo, _) | (command, StoreKind::Memory) => {
            command.run(InMemoryRoster::new()).await
        }
        (command, StoreKind::File) => {
            let roster = JsonFileRoster::open(&config.roster_path)
                .await
                .with_context(|| {
                    format!("Failed to open roster {}", config.roster_path.display())
                })?;
            command.run(roster).await
        }
    }
}
