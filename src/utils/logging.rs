use crate::constants::{DEFAULT_LOG_LEVEL, LOG_DIR, LOG_FILE_NAME};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system with the specified log level.
/// Logs go to stderr so that stdout only carries the extracted tasks.
///
/// # Arguments
///
/// * `log_level` - The desired log filter (e.g. "warn", "debug", "taskscan=trace")
/// * `with_file` - Whether to also log to a daily rotating file in the "logs" directory.
///
/// # Example
///
/// ```
/// // Warnings only, on stderr; stdout stays free for `--format json`
/// init_logging("warn", false);
///
/// // Or: extraction details for this crate, also kept in logs/taskscan.log.<date>
/// init_logging("taskscan=debug", true);
/// ```
pub fn init_logging(log_level: &str, with_file: bool) {
    let filter = match EnvFilter::try_new(log_level) {
        Ok(f) => f,
        Err(_) => {
            eprintln!(
                "Invalid log level '{}', defaulting to '{}'",
                log_level, DEFAULT_LOG_LEVEL
            );
            EnvFilter::new(DEFAULT_LOG_LEVEL)
        }
    };

    let stderr_layer = fmt::layer()
        .with_line_number(true)
        .with_writer(std::io::stderr);

    if with_file {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_NAME);

        let file_layer = fmt::layer()
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }
}
