//! Single running tracker per user, located through a PID file.
//!
//! A second invocation never opens the log itself: it finds the live
//! instance and signals it instead.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What a second invocation can ask of the live instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Toggle,
    Suspend,
}

/// PID of a live instance recorded at `path`, if any. A PID file naming a
/// dead process (or ourselves) is treated as stale.
pub fn live_pid(path: &Path) -> AppResult<Option<u32>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let Ok(pid) = content.trim().parse::<u32>() else {
        log::warn!("ignoring unreadable pid file {}", path.display());
        return Ok(None);
    };

    if pid == std::process::id() || !is_pid_running(pid) {
        log::debug!("stale pid file {} (pid {pid})", path.display());
        return Ok(None);
    }
    Ok(Some(pid))
}

/// Signal the live instance. Returns its PID.
pub fn forward(path: &Path, request: Request) -> AppResult<u32> {
    let pid = live_pid(path)?.ok_or(AppError::NotRunning)?;
    send(pid, request)?;
    log::info!("forwarded {request:?} to pid {pid}");
    Ok(pid)
}

/// Held by the running instance; removes the PID file on drop.
#[derive(Debug)]
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    pub fn acquire(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, format!("{}\n", std::process::id()))?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for PidFile {
    fn drop(&mut self) {
        // only remove it if it still names us
        let ours = fs::read_to_string(&self.path)
            .map(|c| c.trim() == std::process::id().to_string())
            .unwrap_or(false);
        if ours && let Err(e) = fs::remove_file(&self.path) {
            log::warn!("cannot remove pid file {}: {e}", self.path.display());
        }
    }
}

/// Returns true if a process with the given PID exists (Unix: kill(pid, 0)).
#[cfg(unix)]
pub fn is_pid_running(pid: u32) -> bool {
    let Ok(pid) = libc::pid_t::try_from(pid) else {
        return false;
    };
    if pid <= 0 {
        return false;
    }
    if unsafe { libc::kill(pid, 0) } == 0 {
        return true;
    }
    // exists, but belongs to someone else
    io::Error::last_os_error().raw_os_error() == Some(libc::EPERM)
}

#[cfg(not(unix))]
pub fn is_pid_running(pid: u32) -> bool {
    let _ = pid;
    false
}

#[cfg(unix)]
fn send(pid: u32, request: Request) -> AppResult<()> {
    let sig = match request {
        Request::Toggle => libc::SIGUSR1,
        Request::Suspend => libc::SIGUSR2,
    };
    let target = libc::pid_t::try_from(pid)
        .map_err(|_| AppError::Signal(format!("invalid pid {pid}")))?;
    if unsafe { libc::kill(target, sig) } != 0 {
        return Err(AppError::Signal(format!(
            "cannot signal pid {pid}: {}",
            io::Error::last_os_error()
        )));
    }
    Ok(())
}

#[cfg(not(unix))]
fn send(pid: u32, request: Request) -> AppResult<()> {
    Err(AppError::Unsupported(format!(
        "forwarding {request:?} to pid {pid}"
    )))
}
