// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::new(level);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// One line per kept repository in a selection report.
pub fn format_kept(name: &str) -> String {
    format!("{} {}", "+".green().bold(), name)
}

pub fn format_dropped(name: &str, reason: &str) -> String {
    format!("{} {} {}", "-".red().bold(), name, format!("({})", reason).dimmed())
}
