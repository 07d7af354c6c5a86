use chrono::NaiveDate;

/// The target date for a run, and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedDate {
    /// Parsed from the command-line argument.
    Parsed(NaiveDate),
    /// The argument was missing or unparsable; today's date is used.
    Fallback(NaiveDate),
}

impl ResolvedDate {
    pub fn date(&self) -> NaiveDate {
        match self {
            ResolvedDate::Parsed(d) | ResolvedDate::Fallback(d) => *d,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedDate::Fallback(_))
    }
}
