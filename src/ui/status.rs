//! Text shown by the running tracker once per second.

use crate::core::{Clock, Tracker};
use crate::utils::secs2hm;
use ansi_term::Colour;
use chrono::{DateTime, Local};

/// Display values derived from the tracker at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub running: bool,
    pub today_seconds: i64,
    pub pause_seconds: Option<i64>,
}

impl StatusView {
    pub fn capture<C: Clock>(tracker: &Tracker<C>, now: DateTime<Local>) -> Self {
        Self {
            running: tracker.is_running(),
            today_seconds: tracker.today_total_seconds(now),
            pause_seconds: tracker.pause_elapsed_seconds(now),
        }
    }

    pub fn render(&self, show_pause: bool, color: bool) -> String {
        let (label, colour) = if self.running {
            ("Working", Colour::Green)
        } else {
            ("Pause", Colour::Red)
        };
        let label = if color {
            colour.bold().paint(label).to_string()
        } else {
            label.to_string()
        };

        let mut out = format!(
            "{label}  Worked {} today",
            secs2hm(self.today_seconds)
        );

        if show_pause && let Some(p) = self.pause_seconds {
            out.push_str(&format!("  Pausing for {}", secs2hm(p)));
        }

        let action = if self.running { "stop" } else { "start" };
        out.push_str(&format!("  (ENTER to {action})"));
        out
    }
}
