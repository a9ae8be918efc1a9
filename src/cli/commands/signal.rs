use crate::cli::parser::Commands;
use crate::config::Config;
use crate::daemon::instance::{self, Request};
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle `toggle` and `suspend`: forward the request to the live instance.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let request = match cmd {
        Commands::Toggle => Request::Toggle,
        Commands::Suspend => Request::Suspend,
        _ => return Ok(()),
    };

    let pid = instance::forward(&cfg.pid_path(), request)?;
    success(format!("Sent {request:?} to worktimer (pid {pid})"));
    Ok(())
}
