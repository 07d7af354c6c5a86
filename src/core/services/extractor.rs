use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::core::models::log_record::{AccessStatus, LogRecord};

/// Shape of a Latchburg log line:
///
/// - `([0-9]{4}-[0-9]{2}-[0-9]{2})` the date
/// - `([0-9]{2}:[0-9]{2}:[0-9]{2})` the time; the `,mmm` milliseconds are
///   matched but left out of the capture
/// - `([AU])` first letter of "Allowed" or "Unauthorized"
/// - `.*\s(\S+)\s*$` the last whitespace-delimited token on the line: a
///   user name when allowed, card data when denied
const LINE_PATTERN: &str =
    r"([0-9]{4}-[0-9]{2}-[0-9]{2}) ([0-9]{2}:[0-9]{2}:[0-9]{2}),[0-9]{3} ([AU]).*\s(\S+)\s*$";

static LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).expect("line pattern is a valid regex"));

const LOG_DATE_FORMAT: &str = "%Y-%m-%d";
const LOG_TIME_FORMAT: &str = "%H:%M:%S";

/// Reduces raw log lines to access records for a single day.
///
/// Lines that do not match the log shape, or whose date/time fields are not
/// real calendar values, are skipped without error. Denied entries never
/// keep their trailing token.
pub struct Extractor;

impl Extractor {
    /// Extract the records dated `target`, in input order.
    pub fn extract<I, S>(&self, lines: I, target: NaiveDate) -> Vec<LogRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.parse_line(line.as_ref()))
            .filter(|record| record.date == target)
            .collect()
    }

    /// Classify a single line, regardless of its date.
    pub fn parse_line(&self, line: &str) -> Option<LogRecord> {
        let caps = LINE_RE.captures(line)?;

        let date = NaiveDate::parse_from_str(&caps[1], LOG_DATE_FORMAT).ok()?;
        let time = NaiveTime::parse_from_str(&caps[2], LOG_TIME_FORMAT).ok()?;
        let status = AccessStatus::from_letter(&caps[3])?;

        Some(LogRecord::new(date, time, status, &caps[4]))
    }
}
