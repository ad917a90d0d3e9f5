//! timekeeper library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (timer core, record store, backups, config).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{Config, Paths};
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, paths: &Paths) -> AppResult<()> {
    match &cli.command {
        Commands::Track { .. } => cli::commands::track::handle(&cli.command, cfg, paths),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, paths),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg, paths),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, paths),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg, paths),
        Commands::Restore { .. } => cli::commands::restore::handle(&cli.command, cfg, paths),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, paths),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg, paths),
        Commands::Report => cli::commands::report::handle(&cli.command, cfg, paths),
        Commands::Projects { .. } => cli::commands::projects::handle(&cli.command, paths),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, paths),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_dir = match &cli.config_dir {
        Some(dir) => expand_tilde(dir),
        None => Config::default_dir(),
    };
    let paths = Paths::new(config_dir, cli.data.as_deref().map(expand_tilde));

    // Load config once; every handler receives the same view.
    let cfg = Config::load(&paths.config_dir);

    dispatch(&cli, &cfg, &paths)
}
