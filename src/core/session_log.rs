//! Durable log of completed work sessions.
//!
//! The store is a plain text file with one `<start>,<end>` record per line.
//! It is rewritten in full on every append: the new content goes to a
//! sibling `.tmp` file which is then renamed over the log, so a reader only
//! ever sees a complete file.

use crate::errors::{AppError, AppResult};
use crate::models::interval::{decode_timestamp, encode_timestamp};
use crate::models::Interval;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct SessionLog {
    path: PathBuf,
    intervals: Vec<Interval>,
}

impl SessionLog {
    /// An empty log bound to `path`. Nothing is written until the first append.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            intervals: Vec::new(),
        }
    }

    /// Read the log at `path`. A missing file is an empty history.
    pub fn load(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        let content = match fs::read(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no session log at {}, starting empty", path.display());
                return Ok(Self::empty(path));
            }
            Err(e) => return Err(e.into()),
        };

        let mut intervals = parse_intervals(&path, &content)?;
        // stable: equal starts keep file order
        intervals.sort_by_key(|iv| iv.start());

        log::info!(
            "loaded {} session(s) from {}",
            intervals.len(),
            path.display()
        );
        Ok(Self { path, intervals })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Add a closed session and rewrite the store.
    pub fn append(&mut self, interval: Interval) -> AppResult<()> {
        self.intervals.push(interval);
        self.persist()
    }

    /// Replace the store with the complete current interval set.
    pub fn persist(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = tmp_path(&self.path);
        let file = write_intervals(File::create(&tmp)?, &self.intervals)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp, &self.path)?;

        log::debug!(
            "persisted {} session(s) to {}",
            self.intervals.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Worked seconds for the local calendar day of `reference`.
    pub fn today_seconds(&self, reference: &DateTime<Local>) -> i64 {
        self.today_seconds_in(reference)
    }

    /// Sum of rounded durations of every session whose start falls on the
    /// same calendar day as `reference`, judged in `reference`'s time zone.
    /// Sessions crossing midnight count entirely toward their start day.
    pub fn today_seconds_in<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> i64 {
        let tz = reference.timezone();
        let day = reference.date_naive();

        self.intervals
            .iter()
            .filter(|iv| iv.start().with_timezone(&tz).date_naive() == day)
            .map(Interval::rounded_seconds)
            .sum()
    }

    /// Sessions that started on the given local date, in log order.
    pub fn sessions_on(&self, date: NaiveDate) -> Vec<&Interval> {
        self.intervals
            .iter()
            .filter(|iv| iv.start().with_timezone(&Local).date_naive() == date)
            .collect()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Decode the store line by line. Line numbers are physical (1-based), so
/// blank lines still count toward the position reported in errors.
fn parse_intervals(path: &Path, content: &[u8]) -> AppResult<Vec<Interval>> {
    let parse_error = |line: u64, content: &str, reason: String| AppError::Parse {
        path: path.to_path_buf(),
        line,
        content: content.to_string(),
        reason,
    };

    let mut out = Vec::new();

    for (idx, raw) in content.split(|b| *b == b'\n').enumerate() {
        let line = idx as u64 + 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        if raw.is_empty() {
            continue;
        }

        let text = std::str::from_utf8(raw).map_err(|_| {
            parse_error(line, &String::from_utf8_lossy(raw), "invalid UTF-8".to_string())
        })?;

        let fields: Vec<&str> = text.split(',').collect();
        let [start, end] = fields.as_slice() else {
            return Err(parse_error(
                line,
                text,
                format!("expected 2 comma-separated fields, found {}", fields.len()),
            ));
        };

        let start = decode_timestamp(start)
            .map_err(|e| parse_error(line, text, format!("invalid start timestamp: {e}")))?;
        let end = decode_timestamp(end)
            .map_err(|e| parse_error(line, text, format!("invalid end timestamp: {e}")))?;

        let interval = Interval::new(start, end)
            .ok_or_else(|| parse_error(line, text, "end is not after start".to_string()))?;
        out.push(interval);
    }

    Ok(out)
}

fn write_intervals<W: Write>(writer: W, intervals: &[Interval]) -> io::Result<W> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for iv in intervals {
        wtr.write_record([encode_timestamp(&iv.start()), encode_timestamp(&iv.end())])
            .map_err(io::Error::from)?;
    }

    wtr.flush()?;
    wtr.into_inner().map_err(|e| e.into_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeDelta, Utc};
    use tempfile::TempDir;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        decode_timestamp(s).unwrap()
    }

    fn iv(a: &str, b: &str) -> Interval {
        Interval::new(ts(a), ts(b)).unwrap()
    }

    fn write_log(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("work_times.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        let log = SessionLog::load(dir.path().join("absent.csv")).unwrap();
        assert!(log.is_empty());
        assert_eq!(log.today_seconds(&Local::now()), 0);
    }

    #[test]
    fn load_skips_blank_lines_and_tolerates_crlf() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            "2024-01-01T09:00:00Z,2024-01-01T09:00:05Z\r\n\r\n\n2024-01-01T10:00:00Z,2024-01-01T10:30:00Z\n",
        );
        let log = SessionLog::load(&path).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.intervals()[1].rounded_seconds(), 1800);
    }

    #[test]
    fn malformed_line_reports_its_line_number() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "2024-01-01T09:00:00Z,2024-01-01T09:00:05Z\ngarbage\n");

        match SessionLog::load(&path) {
            Err(AppError::Parse { line, content, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "garbage");
            }
            other => panic!("expected parse error, got {:?}", other.map(|l| l.len())),
        }
    }

    #[test]
    fn blank_lines_still_count_toward_the_reported_line() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            "2024-01-01T09:00:00Z,2024-01-01T09:00:05Z\n\n\r\ngarbage\n",
        );

        match SessionLog::load(&path) {
            Err(AppError::Parse { line, content, .. }) => {
                assert_eq!(line, 4);
                assert_eq!(content, "garbage");
            }
            other => panic!("expected parse error, got {:?}", other.map(|l| l.len())),
        }
    }

    #[test]
    fn invalid_utf8_is_a_parse_error_on_its_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("work_times.csv");
        let mut bytes = b"2024-01-01T09:00:00Z,2024-01-01T09:00:05Z\n".to_vec();
        bytes.extend_from_slice(b"2024-01-01T10:00:00Z,\xff\xfe\n");
        fs::write(&path, bytes).unwrap();

        let err = SessionLog::load(&path).err().unwrap();
        assert!(matches!(err, AppError::Parse { line: 2, .. }));
        assert!(err.to_string().contains("invalid UTF-8"));
    }

    #[test]
    fn quoted_fields_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            "\"2024-01-01T09:00:00Z\",\"2024-01-01T09:00:05Z\"\n",
        );
        let err = SessionLog::load(&path).err().unwrap();
        assert!(matches!(err, AppError::Parse { line: 1, .. }));
        assert!(err.to_string().contains("invalid start timestamp"));
    }

    #[test]
    fn undecodable_timestamp_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "2024-01-01T09:00:00Z,yesterday\n");
        let err = SessionLog::load(&path).err().unwrap();
        assert!(matches!(err, AppError::Parse { line: 1, .. }));
        assert!(err.to_string().contains("invalid end timestamp"));
    }

    #[test]
    fn too_many_fields_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            "2024-01-01T09:00:00Z,2024-01-01T09:00:05Z,2024-01-01T09:00:09Z\n",
        );
        assert!(matches!(
            SessionLog::load(&path),
            Err(AppError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn inverted_interval_is_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "2024-01-01T09:00:05Z,2024-01-01T09:00:00Z\n");
        let err = SessionLog::load(&path).err().unwrap();
        assert!(err.to_string().contains("end is not after start"));
    }

    #[test]
    fn load_sorts_by_start_and_keeps_ties_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            "2024-01-02T09:00:00Z,2024-01-02T10:00:00Z\n\
             2024-01-01T09:00:00Z,2024-01-01T12:00:00Z\n\
             2024-01-01T09:00:00Z,2024-01-01T09:30:00Z\n",
        );
        let log = SessionLog::load(&path).unwrap();
        let ends: Vec<_> = log.intervals().iter().map(|iv| iv.end()).collect();
        assert_eq!(
            ends,
            vec![
                ts("2024-01-01T12:00:00Z"),
                ts("2024-01-01T09:30:00Z"),
                ts("2024-01-02T10:00:00Z"),
            ]
        );
    }

    #[test]
    fn append_rewrites_the_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("work_times.csv");

        let mut log = SessionLog::empty(&path);
        log.append(iv("2024-01-01T09:00:00Z", "2024-01-01T09:00:05Z"))
            .unwrap();
        log.append(iv("2024-01-01T10:00:00.250+01:00", "2024-01-01T10:02:05+01:00"))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "2024-01-01T09:00:00Z,2024-01-01T09:00:05Z\n\
             2024-01-01T10:00:00.250+01:00,2024-01-01T10:02:05+01:00\n"
        );
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn persist_then_load_reproduces_the_sessions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("work_times.csv");

        let mut log = SessionLog::empty(&path);
        log.append(iv("2024-05-01T13:00:00.123456789+02:00", "2024-05-01T14:00:00+02:00"))
            .unwrap();
        log.append(iv("2024-05-01T08:00:00Z", "2024-05-01T08:45:00Z"))
            .unwrap();

        let reloaded = SessionLog::load(&path).unwrap();
        let mut expected = log.intervals().to_vec();
        expected.sort_by_key(|iv| iv.start());
        assert_eq!(reloaded.intervals(), expected.as_slice());

        reloaded.persist().unwrap();
        let again = SessionLog::load(&path).unwrap();
        assert_eq!(again.intervals(), reloaded.intervals());
    }

    #[test]
    fn persist_failure_is_surfaced() {
        let dir = TempDir::new().unwrap();
        // a directory where the log file should be
        let path = dir.path().join("work_times.csv");
        fs::create_dir(&path).unwrap();

        let mut log = SessionLog::empty(&path);
        let res = log.append(iv("2024-01-01T09:00:00Z", "2024-01-01T09:00:05Z"));
        assert!(matches!(res, Err(AppError::Io(_))));
    }

    #[test]
    fn today_counts_only_sessions_starting_on_that_day() {
        let mut log = SessionLog::empty("unused.csv");
        log.intervals
            .push(iv("2024-01-01T23:59:00Z", "2024-01-02T00:01:00Z"));
        log.intervals
            .push(iv("2024-01-02T08:00:00Z", "2024-01-02T08:02:05Z"));

        let noon = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
        assert_eq!(log.today_seconds_in(&noon), 125);

        let late = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 30).unwrap();
        assert_eq!(log.today_seconds_in(&late), 120);
    }

    #[test]
    fn day_is_judged_in_the_reference_time_zone() {
        let mut log = SessionLog::empty("unused.csv");
        // 23:30 UTC is already the next day at +02:00
        log.intervals
            .push(iv("2024-01-01T23:30:00Z", "2024-01-01T23:40:00Z"));

        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        let reference = east.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        assert_eq!(log.today_seconds_in(&reference), 600);

        let utc_reference = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        assert_eq!(log.today_seconds_in(&utc_reference), 0);
    }

    #[test]
    fn rounding_is_applied_per_session() {
        let start = ts("2024-01-01T09:00:00Z");
        let mut log = SessionLog::empty("unused.csv");
        for i in 0..3 {
            let s = start + TimeDelta::minutes(i * 10);
            log.intervals
                .push(Interval::new(s, s + TimeDelta::milliseconds(90_500)).unwrap());
        }
        log.intervals.push(
            Interval::new(
                start + TimeDelta::hours(1),
                start + TimeDelta::hours(1) + TimeDelta::milliseconds(90_400),
            )
            .unwrap(),
        );

        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
        assert_eq!(log.today_seconds_in(&reference), 3 * 91 + 90);
    }

    #[test]
    fn sessions_on_filters_by_local_start_date() {
        let now = Local::now();
        let mut log = SessionLog::empty("unused.csv");
        log.intervals
            .push(Interval::new(now - TimeDelta::days(3), now - TimeDelta::days(3) + TimeDelta::minutes(5)).unwrap());
        log.intervals
            .push(Interval::new(now, now + TimeDelta::minutes(5)).unwrap());

        assert_eq!(log.sessions_on(now.date_naive()).len(), 1);
    }
}
