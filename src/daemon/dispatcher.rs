//! Single consumer of [`Event`]s. Owns the tracker, so every transition
//! happens on one thread and start/stop/append never interleave.

use crate::core::{Clock, Tracker};
use crate::daemon::event::Event;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::ui::status::StatusView;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Dispatcher<C: Clock, R: FnMut(StatusView)> {
    tracker: Tracker<C>,
    confirm_exit: bool,
    exit_warned: bool,
    render: R,
}

impl<C: Clock, R: FnMut(StatusView)> Dispatcher<C, R> {
    pub fn new(tracker: Tracker<C>, confirm_exit: bool, render: R) -> Self {
        Self {
            tracker,
            confirm_exit,
            exit_warned: false,
            render,
        }
    }

    pub fn tracker(&self) -> &Tracker<C> {
        &self.tracker
    }

    pub fn handle(&mut self, event: Event) -> AppResult<Flow> {
        log::debug!("event: {event:?}");

        match event {
            Event::ToggleRequested => {
                self.tracker.toggle()?;
                self.exit_warned = false;
            }
            Event::SuspendRequested => {
                if self.tracker.is_running() {
                    log::info!("system suspending, closing the open session");
                }
                self.tracker.stop()?;
            }
            Event::ShutdownRequested { force } => {
                if !force && self.confirm_exit && !self.tracker.can_exit() && !self.exit_warned {
                    self.exit_warned = true;
                    messages::warning(
                        "Still working. Interrupt again to close the session and quit.",
                    );
                    return Ok(Flow::Continue);
                }
                self.tracker.stop()?;
                return Ok(Flow::Exit);
            }
            Event::TickElapsed => {}
        }

        self.refresh();
        Ok(Flow::Continue)
    }

    /// Consume events until shutdown, or until every sender is gone.
    /// The open session is always closed before returning `Ok`.
    pub fn run(mut self, events: Receiver<Event>) -> AppResult<Tracker<C>> {
        self.refresh();

        for event in events.iter() {
            if self.handle(event)? == Flow::Exit {
                return Ok(self.tracker);
            }
        }

        log::debug!("event channel closed");
        self.tracker.stop()?;
        Ok(self.tracker)
    }

    fn refresh(&mut self) {
        let view = StatusView::capture(&self.tracker, self.tracker.now());
        (self.render)(view);
    }
}
