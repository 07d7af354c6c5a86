use crate::core::models::log_record::LogRecord;

pub const CSV_HEADER: &str = "Date,Time,User";

/// Renders access records as CSV text.
///
/// Fields are written as-is, without quoting: a user name containing a
/// comma shifts the columns of its row.
pub struct CsvRenderer;

impl CsvRenderer {
    pub fn render(&self, records: &[LogRecord]) -> String {
        let mut output = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 32);
        output.push_str(CSV_HEADER);
        output.push('\n');

        for record in records {
            output.push_str(&format!(
                "{},{},{}\n",
                record.date.format("%Y-%m-%d"),
                record.time.format("%H:%M:%S"),
                record.subject
            ));
        }

        output
    }
}
