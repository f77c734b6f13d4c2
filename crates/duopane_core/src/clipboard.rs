//! Single-slot in-process clipboard

use crate::{CoreError, Result};
use std::path::PathBuf;

/// Clipboard operation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    Copy,
    Cut,
}

/// The pending item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEntry {
    pub source: PathBuf,
    pub is_dir: bool,
    pub mode: ClipboardMode,
}

/// Holds at most one pending entry; each `set` replaces the previous one.
#[derive(Debug, Default)]
pub struct ClipboardState {
    slot: Option<ClipboardEntry>,
}

impl ClipboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, source: PathBuf, is_dir: bool, mode: ClipboardMode) {
        tracing::debug!("Clipboard set ({:?}): {}", mode, source.display());
        self.slot = Some(ClipboardEntry {
            source,
            is_dir,
            mode,
        });
    }

    pub fn peek(&self) -> Option<&ClipboardEntry> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// The pending entry, or `EmptyClipboard` when nothing is staged.
    ///
    /// The slot stays populated; the caller clears it after a successful
    /// cut-mode paste, keeping copy-mode pastes repeatable.
    pub fn pending(&self) -> Result<ClipboardEntry> {
        self.slot.clone().ok_or(CoreError::EmptyClipboard)
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
