use crate::cli::parser::Commands;
use crate::config::Config;
use crate::daemon;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { start } = cmd {
        daemon::run(cfg, *start)?;
    }

    Ok(())
}
