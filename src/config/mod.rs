use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Overrides the configuration directory (used by tests and portable setups).
pub const HOME_ENV: &str = "WORKTIMER_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_pid_file")]
    pub pid_file: String,
    #[serde(default = "default_true")]
    pub show_pause: bool,
    #[serde(default = "default_true")]
    pub confirm_exit: bool,
}

fn default_log_file() -> String {
    Config::config_dir()
        .join("work_times.csv")
        .to_string_lossy()
        .to_string()
}
fn default_pid_file() -> String {
    Config::config_dir()
        .join("worktimer.pid")
        .to_string_lossy()
        .to_string()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            pid_file: default_pid_file(),
            show_pause: true,
            confirm_exit: true,
        }
    }
}

impl Config {
    /// Per-user configuration directory
    pub fn config_dir() -> PathBuf {
        if let Some(dir) = env::var_os(HOME_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("worktimer")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worktimer.conf")
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    pub fn pid_path(&self) -> PathBuf {
        expand_tilde(&self.pid_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // an empty file means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the configuration directory and a default config file.
    /// An existing config file is left untouched. Returns its path.
    pub fn init_all() -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() {
            return Ok(path);
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        log::info!("wrote default config to {}", path.display());
        Ok(path)
    }
}
