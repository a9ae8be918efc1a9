use crate::daemon::event::Event;
use crate::errors::AppResult;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Send `TickElapsed` once per period until the receiver is dropped.
pub fn spawn_ticker(tx: Sender<Event>) -> AppResult<()> {
    thread::Builder::new()
        .name("ticker".into())
        .spawn(move || {
            log::debug!("ticker started");
            loop {
                thread::sleep(TICK_PERIOD);
                // If the dispatcher is gone, stop.
                if tx.send(Event::TickElapsed).is_err() {
                    log::debug!("ticker stopping (receiver dropped)");
                    break;
                }
            }
        })?;
    Ok(())
}
