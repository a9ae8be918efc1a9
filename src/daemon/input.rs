use crate::daemon::event::Event;
use crate::errors::AppResult;
use std::io::{self, BufRead};
use std::sync::mpsc::Sender;
use std::thread;

/// Every line on stdin toggles the tracker. EOF ends the bridge quietly,
/// which is what happens when the tracker runs detached.
pub fn spawn_stdin_bridge(tx: Sender<Event>) -> AppResult<()> {
    thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                if line.is_err() || tx.send(Event::ToggleRequested).is_err() {
                    break;
                }
            }
            log::debug!("stdin closed");
        })?;
    Ok(())
}
