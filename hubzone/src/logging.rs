//! Logging infrastructure.
//!
//! Structured logging via `tracing`, with optional file output alongside
//! the console:
//! - Console layer on stdout with ANSI colors
//! - Optional non-blocking file layer (no colors)
//! - Filtered by the `RUST_LOG` environment variable, defaulting to `info`

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping it flushes and closes the file writer, if one was configured.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize console-only logging.
pub fn init_logging() -> LoggingGuard {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init: a second initialization in the same process is a no-op
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stdout))
        .try_init();

    LoggingGuard { _file_guard: None }
}

/// Initialize logging with an additional file writer.
///
/// Creates the log directory if needed and truncates the previous log
/// file, so each session starts clean.
pub fn init_logging_with_file(log_dir: &str, log_file: &str) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;
    fs::write(Path::new(log_dir).join(log_file), "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stdout))
        .try_init();

    Ok(LoggingGuard {
        _file_guard: Some(file_guard),
    })
}
