use chrono::{Local, NaiveDate};

use crate::core::models::resolved_date::ResolvedDate;

/// Default pattern for the date argument (ISO 8601 calendar date).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Turns the optional date argument into the run's target date.
pub struct DateResolver {
    date_format: String,
}

impl DateResolver {
    pub fn new(date_format: &str) -> Self {
        Self {
            date_format: date_format.to_string(),
        }
    }

    /// Resolve against the local calendar date.
    pub fn resolve(&self, argument: Option<&str>) -> ResolvedDate {
        self.resolve_with_today(argument, Local::now().date_naive())
    }

    /// Resolve `argument`, falling back to `today` when it is absent or
    /// does not parse under the configured format. Never fails.
    pub fn resolve_with_today(&self, argument: Option<&str>, today: NaiveDate) -> ResolvedDate {
        argument
            .and_then(|s| NaiveDate::parse_from_str(s, &self.date_format).ok())
            .map(ResolvedDate::Parsed)
            .unwrap_or(ResolvedDate::Fallback(today))
    }
}

impl Default for DateResolver {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}
