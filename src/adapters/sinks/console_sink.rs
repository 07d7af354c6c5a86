use std::io::Write;

use chrono::NaiveDate;

use crate::core::errors::Result;
use crate::core::traits::sink::ReportSink;

/// Writes the report to a stream, normally stdout.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn deliver(&mut self, _date: NaiveDate, csv: &str) -> Result<()> {
        self.out.write_all(csv.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
