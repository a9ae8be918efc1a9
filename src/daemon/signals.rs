//! OS signals as tracker events.
//!
//! | signal           | event                                  |
//! |------------------|----------------------------------------|
//! | SIGUSR1          | `ToggleRequested` (forwarded toggle)   |
//! | SIGUSR2          | `SuspendRequested` (system sleep hook) |
//! | SIGINT           | `ShutdownRequested { force: false }`   |
//! | SIGTERM, SIGHUP  | `ShutdownRequested { force: true }`    |

use crate::daemon::event::Event;
use crate::errors::AppResult;
use std::sync::mpsc::Sender;

#[cfg(unix)]
pub fn event_for_signal(sig: i32) -> Option<Event> {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM, SIGUSR1, SIGUSR2};

    match sig {
        SIGUSR1 => Some(Event::ToggleRequested),
        SIGUSR2 => Some(Event::SuspendRequested),
        SIGINT => Some(Event::ShutdownRequested { force: false }),
        SIGTERM | SIGHUP => Some(Event::ShutdownRequested { force: true }),
        _ => None,
    }
}

#[cfg(unix)]
pub fn spawn_signal_bridge(tx: Sender<Event>) -> AppResult<()> {
    use crate::errors::AppError;
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM, SIGUSR1, SIGUSR2};
    use signal_hook::iterator::Signals;
    use std::thread;

    let mut signals = Signals::new([SIGUSR1, SIGUSR2, SIGINT, SIGTERM, SIGHUP])
        .map_err(|e| AppError::Signal(format!("cannot install handlers: {e}")))?;

    thread::Builder::new()
        .name("signals".into())
        .spawn(move || {
            for sig in signals.forever() {
                let Some(event) = event_for_signal(sig) else {
                    continue;
                };
                log::debug!("signal {sig} -> {event:?}");
                if tx.send(event).is_err() {
                    break;
                }
            }
        })?;
    Ok(())
}

#[cfg(not(unix))]
pub fn spawn_signal_bridge(tx: Sender<Event>) -> AppResult<()> {
    let _ = tx;
    log::warn!("signals are not available on this platform; use stdin to toggle");
    Ok(())
}
