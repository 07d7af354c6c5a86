use chrono::NaiveDate;

use crate::core::errors::Result;

/// Port for delivering a rendered report.
///
/// The console and mail variants both receive the finished CSV text;
/// neither sees individual records.
pub trait ReportSink {
    /// Deliver `csv`, the report for `date`.
    fn deliver(&mut self, date: NaiveDate, csv: &str) -> Result<()>;

    /// Short name used in verbose output (e.g. `console`, `mail`).
    fn name(&self) -> &str;
}
