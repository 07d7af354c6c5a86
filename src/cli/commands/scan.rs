use std::path::PathBuf;

use crate::adapters::sinks::console_sink::ConsoleSink;
use crate::adapters::sinks::smtp_sink::SmtpSink;
use crate::adapters::sources::file_log_source::FileLogSource;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::csv_renderer::CsvRenderer;
use crate::core::services::date_resolver::DateResolver;
use crate::core::services::extractor::Extractor;
use crate::core::traits::log_source::LogSource;
use crate::core::traits::sink::ReportSink;

/// Everything the command line can say about a scan.
#[derive(Debug, Default)]
pub struct ScanOptions {
    pub date: Option<String>,
    pub suppress_mail: bool,
    pub config: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub date_format: Option<String>,
    pub verbose: bool,
    pub quiet: bool,
}

/// Execute a scan: resolve the date, read the log, extract, render and
/// deliver.
///
/// A log that is missing or fails mid-read still produces a report from
/// whatever was read; the read error is returned afterwards so the process
/// exits non-zero.
pub fn execute(options: &ScanOptions) -> Result<()> {
    let config = load_config(options)?;

    let resolved = DateResolver::new(&config.date_format).resolve(options.date.as_deref());
    if resolved.is_fallback() && !options.quiet {
        output::warning("No date found, using today's.");
    }
    let target = resolved.date();

    let mut sink = select_sink(&config, options)?;

    let source = FileLogSource::new(&config.log_path);
    if options.verbose {
        output::detail(&format!("Scanning {}", source.describe()));
    }
    let (lines, read_error) = source.read_lines().into_parts();

    let records = Extractor.extract(&lines, target);
    if options.verbose {
        let denied = records.iter().filter(|r| !r.authorized()).count();
        output::detail(&format!(
            "Scanned {} lines, {} records for {} ({denied} unauthorized)",
            lines.len(),
            records.len(),
            target.format("%Y-%m-%d"),
        ));
    }

    let csv = CsvRenderer.render(&records);
    let delivery = sink.deliver(target, &csv);

    if delivery.is_ok() && sink.name() != "console" && !options.quiet {
        output::success(&format!(
            "Results for {} sent via {}",
            target.format("%Y-%m-%d"),
            sink.name()
        ));
    }

    match (read_error, delivery) {
        (None, result) => result,
        (Some(read), Ok(())) => Err(read),
        (Some(read), Err(delivery)) => {
            output::error(&format!("Error: {read}"));
            Err(delivery)
        }
    }
}

/// Load the config file (if any) and apply command-line overrides.
fn load_config(options: &ScanOptions) -> Result<AppConfig> {
    let (mut config, path) = AppConfig::discover(options.config.as_deref())?;

    if options.verbose {
        match &path {
            Some(p) => output::detail(&format!("Using config {}", p.display())),
            None => output::detail("No config file found, using defaults"),
        }
    }

    if let Some(log_file) = &options.log_file {
        config.log_path = log_file.clone();
    }
    if let Some(format) = &options.date_format {
        config.date_format = format.clone();
    }

    Ok(config)
}

/// Mail when fully configured and not suppressed; console otherwise.
fn select_sink(config: &AppConfig, options: &ScanOptions) -> Result<Box<dyn ReportSink>> {
    if options.suppress_mail {
        if options.verbose {
            output::detail("Mail suppressed, printing to console");
        }
        return Ok(Box::new(ConsoleSink::stdout()));
    }

    if let Some(settings) = config.complete_mail() {
        let sink = SmtpSink::from_settings(settings)?;
        if options.verbose {
            output::detail(&format!(
                "Mailing via {}:{}",
                settings.server, settings.port
            ));
        }
        return Ok(Box::new(sink));
    }

    if config.mail.is_some() && !options.quiet {
        output::warning("Mail settings incomplete, printing to console instead.");
    }
    Ok(Box::new(ConsoleSink::stdout()))
}
