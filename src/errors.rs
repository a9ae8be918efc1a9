//! Unified application error type.
//! Every module (core, daemon, cli, config) returns AppError so that the
//! entry point is the only place that decides to report and terminate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Session log
    // ---------------------------
    #[error("Malformed line {line} in {}: {reason} ({content:?})", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        content: String,
        reason: String,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Instance / signalling
    // ---------------------------
    #[error("No running worktimer instance found")]
    NotRunning,

    #[error("A worktimer instance is running (pid {0}); stop it first")]
    AlreadyRunning(u32),

    #[error("Signal error: {0}")]
    Signal(String),

    #[error("Not supported on this platform: {0}")]
    Unsupported(String),
}

pub type AppResult<T> = Result<T, AppError>;
