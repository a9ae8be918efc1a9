//! Formatting utilities used for CLI and status outputs.

/// `H:MM`, with minutes rounded half-up from seconds.
pub fn secs2hm(secs: i64) -> String {
    let minutes = (secs.max(0) + 30) / 60;
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// `HH:MM:SS`, used where a single session's exact length matters.
pub fn secs2hms(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s / 60) % 60, s % 60)
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}
