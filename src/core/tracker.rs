//! Work/pause state machine on top of [`SessionLog`].
//!
//! There is at most one open session. Starting while running and stopping
//! while idle are no-ops. Only `stop` writes to the log.

use crate::core::clock::{Clock, SystemClock};
use crate::core::session_log::SessionLog;
use crate::errors::AppResult;
use crate::models::interval::round_half_up_secs;
use crate::models::Interval;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// Not working. `pause_start` is when the last session ended.
    Idle {
        pause_start: Option<DateTime<Local>>,
    },
    /// Working since `last_start`.
    Running { last_start: DateTime<Local> },
}

pub struct Tracker<C: Clock = SystemClock> {
    log: SessionLog,
    clock: C,
    state: TrackerState,
}

impl Tracker<SystemClock> {
    pub fn with_system_clock(log: SessionLog) -> Self {
        Self::new(log, SystemClock)
    }
}

impl<C: Clock> Tracker<C> {
    pub fn new(log: SessionLog, clock: C) -> Self {
        Self {
            log,
            clock,
            state: TrackerState::Idle { pause_start: None },
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TrackerState::Running { .. })
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let last_start = self.clock.now();
        self.state = TrackerState::Running { last_start };
        log::info!("work started at {}", last_start.format("%H:%M:%S"));
    }

    /// Close the open session, record it and go idle.
    pub fn stop(&mut self) -> AppResult<()> {
        let TrackerState::Running { last_start } = self.state else {
            return Ok(());
        };

        let end = self.clock.now();
        match Interval::new(last_start, end) {
            Some(interval) => {
                self.log.append(interval)?;
                log::info!(
                    "work stopped at {} after {}s",
                    end.format("%H:%M:%S"),
                    interval.rounded_seconds()
                );
            }
            None => log::warn!(
                "discarding empty session: stop at {} is not after start at {}",
                end.to_rfc3339(),
                last_start.to_rfc3339()
            ),
        }

        self.state = TrackerState::Idle {
            pause_start: Some(end),
        };
        Ok(())
    }

    pub fn toggle(&mut self) -> AppResult<()> {
        if self.is_running() {
            self.stop()
        } else {
            self.start();
            Ok(())
        }
    }

    /// Seconds in the open session, 0 while idle.
    pub fn live_elapsed_seconds(&self, now: DateTime<Local>) -> i64 {
        match self.state {
            TrackerState::Running { last_start } => round_half_up_secs(now - last_start).max(0),
            TrackerState::Idle { .. } => 0,
        }
    }

    /// Seconds since the last session ended; `None` while running or before
    /// the first session has ended.
    pub fn pause_elapsed_seconds(&self, now: DateTime<Local>) -> Option<i64> {
        match self.state {
            TrackerState::Idle {
                pause_start: Some(p),
            } => Some(round_half_up_secs(now - p).max(0)),
            _ => None,
        }
    }

    /// Persisted total for `now`'s day plus the open session.
    pub fn today_total_seconds(&self, now: DateTime<Local>) -> i64 {
        self.log.today_seconds(&now) + self.live_elapsed_seconds(now)
    }

    /// Quitting mid-session needs confirmation.
    pub fn can_exit(&self) -> bool {
        !self.is_running()
    }
}
