pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

/// Positional word that forces console output.
pub const NOEMAIL: &str = "noemail";

/// Daily CSV digest of a Latchburg door-controller log.
#[derive(Parser, Debug)]
#[command(name = "latchscan", version, about, long_about = None)]
pub struct Cli {
    /// Date to report on (YYYY-MM-DD, default today) and/or `noemail`
    #[arg(value_name = "DATE|noemail", num_args = 0..=2)]
    pub inputs: Vec<String>,

    /// Print the report instead of mailing it
    #[arg(long)]
    pub no_email: bool,

    /// Path to the configuration file
    #[arg(long, env = "LATCHSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file to scan (overrides log_path)
    #[arg(long, env = "LATCHSCAN_LOG")]
    pub log_file: Option<PathBuf>,

    /// Pattern for the date argument (overrides date_format)
    #[arg(long)]
    pub date_format: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// The date argument: the first positional word that is not `noemail`.
    pub fn date_argument(&self) -> Option<&str> {
        self.inputs
            .iter()
            .map(String::as_str)
            .find(|word| *word != NOEMAIL)
    }

    /// True when mail delivery was switched off on the command line.
    pub fn mail_suppressed(&self) -> bool {
        self.no_email || self.inputs.iter().any(|word| word == NOEMAIL)
    }
}
