//! DuoPane Core
//!
//! Domain state for the dual-pane manager: the panel controller with its
//! two path cursors, the single-slot clipboard, configuration, and the
//! core error type. The presentation layer drives everything through
//! [`PanelController`] and renders the listings each intent returns.

mod clipboard;
mod config;
mod controller;
mod cursor;
mod error;

pub use clipboard::{ClipboardEntry, ClipboardMode, ClipboardState};
pub use config::{AppConfig, GeneralConfig, LoggingConfig, PanelConfig};
pub use controller::{OpenOutcome, PanelController, PanelMode, Side};
pub use cursor::PathCursor;
pub use error::{CoreError, Result};
