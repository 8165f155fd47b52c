//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;

use tracing_subscriber::EnvFilter;

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Initialize the logger with defaults (info, pretty, stdout)
pub fn init_logger() -> InitResult {
    init_logger_with_file(None, false, None)
}

/// Initialize the logger
///
/// - `RUST_LOG` wins over `log_level` when set
/// - `json` switches to one JSON object per line (production)
/// - `log_dir`, if it exists, receives a daily rolling `cafe-web.<date>` file instead of stdout
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) -> InitResult {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},tower_http=info")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .map(Path::new)
        .filter(|p| p.exists())
        .map(|p| tracing_appender::rolling::daily(p, "cafe-web"));

    match (json, file_appender) {
        (true, Some(appender)) => builder.json().with_writer(appender).try_init(),
        (true, None) => builder.json().try_init(),
        (false, Some(appender)) => builder.with_ansi(false).with_writer(appender).try_init(),
        (false, None) => builder.try_init(),
    }
}
