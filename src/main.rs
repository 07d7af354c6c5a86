mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::Cli;
use cli::commands::scan::ScanOptions;

fn main() {
    let args = Cli::parse();

    let options = ScanOptions {
        date: args.date_argument().map(str::to_string),
        suppress_mail: args.mail_suppressed(),
        config: args.config.clone(),
        log_file: args.log_file.clone(),
        date_format: args.date_format.clone(),
        verbose: args.verbose,
        quiet: args.quiet,
    };

    if let Err(e) = cli::commands::scan::execute(&options) {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
