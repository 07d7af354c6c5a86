use std::fmt;

use chrono::{NaiveDate, NaiveTime};

/// Literal written in place of the identifying token of a denied entry.
pub const REDACTION_MARKER: &str = "[unauthorized]";

/// Outcome of a single access attempt, taken from the status letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    /// `A`: the door controller let the badge through.
    Allowed,
    /// `U`: the attempt was denied. The logged token is card data.
    Unauthorized,
}

impl AccessStatus {
    /// Map a status letter to a status. Only `A` and `U` are recognized.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "A" => Some(Self::Allowed),
            "U" => Some(Self::Unauthorized),
            _ => None,
        }
    }
}

/// Who the record is about, as far as the report may tell.
///
/// `Redacted` deliberately carries nothing: there is no way to build a
/// record for a denied entry that still holds the raw card token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    User(String),
    Redacted,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::User(name) => f.write_str(name),
            Subject::Redacted => f.write_str(REDACTION_MARKER),
        }
    }
}

/// One access event extracted from a Latchburg log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AccessStatus,
    pub subject: Subject,
}

impl LogRecord {
    /// Build a record, applying the redaction rule to `token`.
    pub fn new(date: NaiveDate, time: NaiveTime, status: AccessStatus, token: &str) -> Self {
        let subject = match status {
            AccessStatus::Allowed => Subject::User(token.to_string()),
            AccessStatus::Unauthorized => Subject::Redacted,
        };
        Self {
            date,
            time,
            status,
            subject,
        }
    }

    pub fn authorized(&self) -> bool {
        self.status == AccessStatus::Allowed
    }
}
