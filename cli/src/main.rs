//! Container Dashboard — interactive console
//!
//! Seeds an in-memory store and reads commands from stdin.
//!
//! ```sh
//! # Run with default config (~/.config/container-dashboard/config.toml)
//! container-console
//!
//! # Custom config path, verbose logs
//! container-console --config ./dashboard.toml --log-level debug
//!
//! # Validate config without starting
//! container-console --check
//! ```

mod commands;
mod console;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use container_dashboard::config::{AppConfig, LoggingConfig};
use container_dashboard::application::CredentialTable;
use container_dashboard::{default_config_path, init_tracing, StoreController};

use crate::console::Console;

#[derive(Parser, Debug)]
#[command(
    name = "container-console",
    version,
    about = "In-memory back office for containers, warehouses, users and feedback"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "DASHBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    /// Start with empty collections instead of the demo data.
    #[arg(long)]
    no_fixtures: bool,

    /// Keep the theme for this session only.
    #[arg(long)]
    no_persist: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg.logging, cli.log_level.as_deref());
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let fallback = LoggingConfig::default();
            init_tracing(&fallback, cli.log_level.as_deref());
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check {
                return Err(e.into());
            }
            error!("Using default configuration.");
            AppConfig {
                logging: fallback,
                ..AppConfig::default()
            }
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if cli.no_fixtures {
        info!("CLI override: load_fixtures = false");
        config.seed.load_fixtures = false;
    }
    if cli.no_persist {
        info!("CLI override: preferences.persist = false");
        config.preferences.persist = false;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        CredentialTable::new(config.security.bcrypt_cost)?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Log level   : {}", cli.log_level.as_deref().unwrap_or(&config.logging.level));
        println!("   bcrypt cost : {}", config.security.bcrypt_cost);
        println!("   Fixtures    : {}", config.seed.load_fixtures);
        if config.preferences.persist {
            println!("   Preferences : {}", config.preferences.resolved_path().display());
        } else {
            println!("   Preferences : session only");
        }
        return Ok(());
    }

    // ── Start console ──────────────────────────────────────────
    let store = StoreController::from_config(&config)?;
    info!(theme = %store.theme(), "Store ready");

    let mut console = Console::new(store);
    console.run(io::stdin().lock(), io::stdout().lock())?;

    let state = console.store().state();
    info!(
        users = state.users.len(),
        containers = state.containers.len(),
        feedbacks = state.feedbacks.len(),
        "Session ended; in-memory changes discarded"
    );
    Ok(())
}
