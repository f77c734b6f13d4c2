//! Per-panel path cursor with back-history

use std::path::{Path, PathBuf};

/// One panel's current directory plus its back-navigation stack.
///
/// Back-only: there is no forward stack.
pub struct PathCursor {
    current: PathBuf,
    history: Vec<PathBuf>,
}

impl PathCursor {
    pub fn new<P: Into<PathBuf>>(initial: P) -> Self {
        Self {
            current: initial.into(),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Change directory, pushing the previous path onto the history
    pub fn navigate_to<P: Into<PathBuf>>(&mut self, path: P) {
        let old = std::mem::replace(&mut self.current, path.into());
        self.history.push(old);
    }

    /// Pop the history; a no-op at depth 0
    pub fn go_back(&mut self) -> bool {
        if let Some(prev) = self.history.pop() {
            self.current = prev;
            true
        } else {
            false
        }
    }
}
