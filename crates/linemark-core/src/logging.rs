//! `tracing` subscriber setup

use crate::config::LogConfig;
use std::path::Path;
use std::str::FromStr;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Resolve the effective level from the configured name and `-v` count.
/// Unknown names fall back to `warn`; each `-v` can only raise verbosity.
pub fn effective_level(configured: &str, verbose: u8) -> Level {
    let base = Level::from_str(configured.trim()).unwrap_or(Level::WARN);
    let requested = match verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    base.max(requested)
}

/// Install the global subscriber.
///
/// Logs go to stderr unless `config.file` is set, in which case they are
/// written through a non-blocking appender. Keep the returned guard alive
/// until exit so buffered lines are flushed. A second call is a no-op.
pub fn init(config: &LogConfig, verbose: u8) -> Option<WorkerGuard> {
    let level = effective_level(&config.level, verbose);

    if let Some(file) = config.file.as_deref() {
        let path = Path::new(file);
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let name = path.file_name().unwrap_or(path.as_os_str());

        let appender = tracing_appender::rolling::never(dir, name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(writer)
            .try_init();
        return Some(guard);
    }

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
    None
}
