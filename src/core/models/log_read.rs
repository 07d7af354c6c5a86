use crate::core::errors::LatchscanError;

/// Result of reading the access log once, in full.
///
/// A read failure does not discard what was read before it: the scan
/// still runs over `lines`, and the caller reports `error` afterwards.
#[derive(Debug)]
pub enum LogRead {
    Complete(Vec<String>),
    Partial {
        lines: Vec<String>,
        error: LatchscanError,
    },
}

impl LogRead {
    /// The lines that were read, complete or not.
    #[cfg(test)]
    pub fn lines(&self) -> &[String] {
        match self {
            LogRead::Complete(lines) | LogRead::Partial { lines, .. } => lines,
        }
    }

    /// Split into the lines and the failure, if any.
    pub fn into_parts(self) -> (Vec<String>, Option<LatchscanError>) {
        match self {
            LogRead::Complete(lines) => (lines, None),
            LogRead::Partial { lines, error } => (lines, Some(error)),
        }
    }
}
