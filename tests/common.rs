#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate, SecondsFormat, TimeDelta, TimeZone};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated config dir, log file and pid file for one test.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("work_times.csv")
    }

    pub fn pid_path(&self) -> PathBuf {
        self.dir.path().join("worktimer.pid")
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// The binary with config, log and pid file all inside the sandbox.
    pub fn wt(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("worktimer");
        cmd.env("WORKTIMER_HOME", self.home())
            .env_remove("RUST_LOG")
            .arg("--log")
            .arg(self.log_path())
            .arg("--pid-file")
            .arg(self.pid_path());
        cmd
    }

    pub fn write_log(&self, content: &str) {
        fs::write(self.log_path(), content).expect("write log");
    }

    pub fn read_log(&self) -> String {
        fs::read_to_string(self.log_path()).unwrap_or_default()
    }
}

/// Local wall-clock instant on `date`, as written in the log.
pub fn local_at(date: NaiveDate, h: u32, m: u32, s: u32) -> DateTime<Local> {
    Local
        .from_local_datetime(&date.and_hms_opt(h, m, s).expect("valid time"))
        .earliest()
        .expect("representable local time")
}

/// One `<start>,<end>` record starting at `start` and lasting `secs`.
pub fn record(start: DateTime<Local>, secs: i64) -> String {
    let end = start + TimeDelta::seconds(secs);
    format!(
        "{},{}\n",
        start.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        end.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    )
}
