//! Logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{ClientConfig, DEFAULT_LOG_LEVEL};

/// Initialize the logging system
///
/// Sets up:
/// - An `EnvFilter` from `RUST_LOG`, falling back to the configured level
/// - A compact stderr layer (stdout is reserved for command output)
/// - A daily rotating file layer when `log_dir` is configured
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// lifetime of the program.
pub fn init(config: &ClientConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_dir) = config.log_dir.as_ref() else {
        let _ = registry.try_init();
        return None;
    };

    if let Err(e) = fs::create_dir_all(log_dir) {
        eprintln!("Warning: Failed to create log directory {}: {}", log_dir.display(), e);
        let _ = registry.try_init();
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, "moduway.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    let _ = registry.with(file_layer).try_init();

    tracing::info!(
        log_dir = %log_dir.display(),
        log_level = %config.log_level,
        "File logging initialized"
    );

    Some(guard)
}
