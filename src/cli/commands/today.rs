use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SessionLog;
use crate::daemon::instance;
use crate::errors::{AppError, AppResult};
use crate::utils::secs2hm;
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TodayReport {
    date: NaiveDate,
    worked_seconds: i64,
    worked: String,
    sessions: usize,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { json } = cmd {
        let log = SessionLog::load(cfg.log_path())?;
        let now = Local::now();
        let worked_seconds = log.today_seconds(&now);

        let report = TodayReport {
            date: now.date_naive(),
            worked_seconds,
            worked: secs2hm(worked_seconds),
            sessions: log.sessions_on(now.date_naive()).len(),
        };

        if *json {
            let out = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::Io(e.into()))?;
            println!("{out}");
            return Ok(());
        }

        println!(
            "Worked {} today ({} session{})",
            report.worked,
            report.sessions,
            if report.sessions == 1 { "" } else { "s" }
        );

        if let Some(pid) = instance::live_pid(&cfg.pid_path())? {
            println!("Note: a tracker is running (pid {pid}); its open session is not counted.");
        }
    }

    Ok(())
}
