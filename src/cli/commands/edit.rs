use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SessionLog;
use crate::daemon::instance;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::editor::open_in_editor;

/// Handle the `edit` command: the only way to correct past sessions.
/// Refused while a tracker is running, since it would overwrite the edit
/// on its next stop.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { editor } = cmd {
        if let Some(pid) = instance::live_pid(&cfg.pid_path())? {
            return Err(AppError::AlreadyRunning(pid));
        }

        let path = cfg.log_path();
        if !path.exists() {
            // give the editor something to open
            SessionLog::empty(&path).persist()?;
        }

        open_in_editor(&path, editor.clone())?;

        // catch mistakes now rather than on the next start
        match SessionLog::load(&path) {
            Ok(log) => success(format!("Session log is valid ({} sessions)", log.len())),
            Err(e) => warning(format!("The session log no longer loads: {e}")),
        }
    }

    Ok(())
}
