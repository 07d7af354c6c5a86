use std::path::PathBuf;

/// All domain errors for Latchscan.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum LatchscanError {
    #[error(
        "Unable to find log file {path}\n\n  \
         Check your path and try again.\n  \
         Set log_path in latchscan.toml or pass --log-file <path>."
    )]
    LogNotFound { path: PathBuf },

    #[error("Cannot read log file {path} due to an I/O error: {source}")]
    LogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Invalid configuration: {detail}\n\n  \
         Expected format (latchscan.toml):\n    \
         log_path = \"latchburg.log\"\n    \
         date_format = \"%Y-%m-%d\"\n\n    \
         [mail]\n    \
         server = \"smtp.example.org\"\n    \
         recipients = [\"admin@example.org\"]"
    )]
    InvalidConfig { detail: String },

    #[error(
        "Mail delivery failed: {reason}\n\n  \
         The report was not sent and will not be retried.\n  \
         Re-run with 'noemail' to print the CSV instead."
    )]
    MailFailed { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LatchscanError>;
