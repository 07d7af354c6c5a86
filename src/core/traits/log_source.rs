use crate::core::models::log_read::LogRead;

/// Port for acquiring the raw lines of an access log.
pub trait LogSource {
    /// Read every line, once. Failures are carried inside `LogRead`
    /// together with whatever was read before them.
    fn read_lines(&self) -> LogRead;

    /// Human-readable description of where the lines come from.
    fn describe(&self) -> String;
}
