//! Tracing subscriber setup

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up the global subscriber: a daily-rolling JSON file, plus a pretty
/// console layer in debug builds. The filter comes from the environment
/// and defaults to `info`.
pub fn init_logging() -> anyhow::Result<()> {
    let log_dir = super::log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "duopane.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The writer stops flushing once the guard drops; the process owns it
    // for its whole lifetime
    std::mem::forget(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    #[cfg(debug_assertions)]
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().pretty())
        .with(fmt::layer().json().with_writer(non_blocking))
        .init();

    #[cfg(not(debug_assertions))]
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_writer(non_blocking))
        .init();

    tracing::info!("Logging initialized, writing to {}", log_dir.display());
    Ok(())
}

/// Delete `.log` files in the log directory older than `days`.
/// Returns how many were removed.
pub fn cleanup_old_logs(days: u32) -> anyhow::Result<usize> {
    use std::time::{Duration, SystemTime};

    let log_dir = super::log_dir();
    if !log_dir.exists() {
        return Ok(0);
    }

    let threshold = SystemTime::now() - Duration::from_secs(days as u64 * 24 * 60 * 60);
    let mut deleted = 0;

    for entry in std::fs::read_dir(&log_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().map_or(false, |ext| ext == "log") {
            let expired = entry
                .metadata()
                .and_then(|m| m.modified())
                .map(|modified| modified < threshold)
                .unwrap_or(false);

            if expired && std::fs::remove_file(&path).is_ok() {
                deleted += 1;
                tracing::debug!("Removed stale log {}", path.display());
            }
        }
    }

    if deleted > 0 {
        tracing::info!("Removed {} stale log files", deleted);
    }
    Ok(deleted)
}
