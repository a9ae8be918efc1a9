use chrono::{DateTime, FixedOffset, SecondsFormat, TimeDelta, TimeZone};

/// A closed work session. `end` is always strictly after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl Interval {
    /// Returns `None` when `end` is not strictly after `start`.
    pub fn new<Tz: TimeZone>(start: DateTime<Tz>, end: DateTime<Tz>) -> Option<Self> {
        let start = start.fixed_offset();
        let end = end.fixed_offset();
        (end > start).then_some(Self { start, end })
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Duration in whole seconds, rounded half-up.
    pub fn rounded_seconds(&self) -> i64 {
        round_half_up_secs(self.duration())
    }
}

/// `round(delta)` in seconds, with .5 rounding up. Works on milliseconds.
pub fn round_half_up_secs(delta: TimeDelta) -> i64 {
    (delta.num_milliseconds() + 500).div_euclid(1000)
}

/// Text encoding used in the log file: RFC 3339, `Z` for UTC, sub-second
/// digits only when present.
pub fn encode_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn decode_timestamp(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s)
}
