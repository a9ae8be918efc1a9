use std::fmt;
use std::io::{self, IsTerminal, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";

/// Clear the in-place status line, if one is showing.
const CLEAR_LINE: &str = "\r\x1b[2K";

fn clear_prefix() -> &'static str {
    if io::stdout().is_terminal() {
        CLEAR_LINE
    } else {
        ""
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{}{} {}{}", clear_prefix(), FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{}{} {}{}", clear_prefix(), FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{}{} {}{}", clear_prefix(), FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

/// Redraw the single status line. On a terminal it is rewritten in place;
/// otherwise each refresh is its own line.
pub fn status_line<T: fmt::Display>(line: T) {
    let mut out = io::stdout().lock();
    let res = if out.is_terminal() {
        write!(out, "{CLEAR_LINE}{line}").and_then(|_| out.flush())
    } else {
        writeln!(out, "{line}")
    };
    if let Err(e) = res {
        log::debug!("status line not written: {e}");
    }
}
