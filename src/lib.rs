//! worktimer library root.
//! Exposes the session log and tracker core, the daemon event loop,
//! the CLI parser, and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod daemon;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Run { .. } => cli::commands::run::handle(&cli.command, cfg),
        Commands::Toggle | Commands::Suspend => cli::commands::signal::handle(&cli.command, cfg),
        Commands::Today { .. } => cli::commands::today::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // RUST_LOG, when set, wins over the default level
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // A broken config must still be fixable through `config --edit` / `init`.
    let mut cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e)
            if matches!(
                cli.command,
                Commands::Init
                    | Commands::Config {
                        edit_config: true,
                        ..
                    }
            ) =>
        {
            ui::messages::warning(format!("{e}; using defaults"));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    if let Some(log) = &cli.log {
        cfg.log_file = log.clone();
    }
    if let Some(pid_file) = &cli.pid_file {
        cfg.pid_file = pid_file.clone();
    }

    dispatch(&cli, &cfg)
}
