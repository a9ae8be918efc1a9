//! The long-running tracker process.
//!
//! One dispatcher thread owns the [`Tracker`]; a ticker, the signal bridge
//! and the stdin bridge only feed it [`Event`]s.

pub mod dispatcher;
pub mod event;
pub mod input;
pub mod instance;
pub mod signals;
pub mod ticker;

pub use dispatcher::{Dispatcher, Flow};
pub use event::Event;

use crate::config::Config;
use crate::core::{SessionLog, Tracker};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::ui::status::StatusView;
use crate::utils::secs2hm;
use instance::{PidFile, Request};
use std::io::{self, IsTerminal};
use std::sync::mpsc;

/// Run the tracker until shutdown. If another instance is already live,
/// toggle it instead and return.
pub fn run(cfg: &Config, start_now: bool) -> AppResult<()> {
    let pid_path = cfg.pid_path();

    match instance::forward(&pid_path, Request::Toggle) {
        Ok(pid) => {
            messages::info(format!("worktimer is already running (pid {pid}); toggled it."));
            return Ok(());
        }
        Err(AppError::NotRunning) => {}
        Err(e) => return Err(e),
    }

    let log = SessionLog::load(cfg.log_path())?;

    // handlers first: a forwarded toggle may arrive as soon as the pid is visible
    let (tx, rx) = mpsc::channel();
    signals::spawn_signal_bridge(tx.clone())?;
    let _pid_file = PidFile::acquire(&pid_path)?;

    let mut tracker = Tracker::with_system_clock(log);
    if start_now {
        tracker.start();
    }

    ticker::spawn_ticker(tx.clone())?;
    input::spawn_stdin_bridge(tx)?;

    messages::info(format!(
        "Tracking into {} (ENTER toggles, Ctrl-C quits)",
        cfg.log_path().display()
    ));

    let show_pause = cfg.show_pause;
    let color = io::stdout().is_terminal();
    let dispatcher = Dispatcher::new(tracker, cfg.confirm_exit, move |view: StatusView| {
        messages::status_line(view.render(show_pause, color))
    });

    let tracker = dispatcher.run(rx)?;

    let now = tracker.now();
    messages::success(format!(
        "Worked {} today",
        secs2hm(tracker.today_total_seconds(now))
    ));
    Ok(())
}
