//! DuoPane Logging & Observability Module
//!
//! Structured logging, panic handling and crash reports for the manager
//! core. Library consumers call [`init`] once at startup.

mod logging;
mod panic_hook;

pub use logging::{cleanup_old_logs, init_logging};
pub use panic_hook::init_panic_hook;

use directories::ProjectDirs;
use std::path::PathBuf;

/// Get the application log directory
pub fn log_dir() -> PathBuf {
    ProjectDirs::from("com", "DuoPane", "DuoPane")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialize all observability features
pub fn init() -> anyhow::Result<()> {
    init_logging()?;
    init_panic_hook();
    Ok(())
}
