use colored::Colorize;

// Everything here goes to stderr: stdout carries only the CSV report.

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("  {} {}", "✓".green(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a verbose detail line.
pub fn detail(msg: &str) {
    eprintln!("  {} {}", "·".dimmed(), msg.dimmed());
}
