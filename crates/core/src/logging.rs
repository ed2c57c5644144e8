use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable overriding where log files are written.
pub const LOG_DIR_ENV: &str = "TSMAPPER_LOG_DIR";

/// `$TSMAPPER_LOG_DIR`, else `$HOME/.tsmapper/logs`, else `./.tsmapper/logs`.
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(LOG_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".tsmapper").join("logs")
}

/// Installs the global subscriber: a daily-rolling file named after `component`,
/// plus stderr output when `to_stderr` is set. Filtering follows `RUST_LOG`
/// (default `info`). Keep the returned guard alive until exit so buffered
/// lines are flushed.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let dir = log_dir();
    let _ = std::fs::create_dir_all(&dir);

    let file_appender = tracing_appender::rolling::daily(&dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    guard
}
