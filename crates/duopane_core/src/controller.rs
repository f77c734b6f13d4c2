//! Panel controller — the intent API consumed by the presentation layer
//!
//! Every intent returns refreshed listings explicitly; the controller
//! never pushes change notifications. Intents that mutate the disk
//! (paste, delete) re-list both panels regardless of the initiating side,
//! since an operation in one panel can affect the directory shown in the
//! other.

use crate::{ClipboardMode, ClipboardState, CoreError, PathCursor, Result};
use duopane_fs::{
    aggregate_by_extension, copy_entry, delete_entry, is_preview_extension, list_directory,
    move_entry, preview_file, DriveRoot, Entry, ExtensionGroup, ListOptions,
};
use std::path::{Path, PathBuf};

/// Panel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Presentation advice: how many panels to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    Dual,
    Single,
}

/// Result of opening an entry
#[derive(Debug, Clone)]
pub enum OpenOutcome {
    /// The entry was a directory; here is the refreshed listing
    Listing(Vec<Entry>),
    /// The entry is a file; the presentation layer should hand the path
    /// to the OS default open handler
    HandOff(PathBuf),
}

/// Orchestrates the two panel cursors, the clipboard and file operations.
pub struct PanelController {
    left: PathCursor,
    right: PathCursor,
    clipboard: ClipboardState,
    options: ListOptions,
    mode: PanelMode,
}

impl PanelController {
    pub fn new(config: &crate::AppConfig) -> Self {
        Self {
            left: PathCursor::new(&config.panels.left_start),
            right: PathCursor::new(&config.panels.right_start),
            clipboard: ClipboardState::new(),
            options: ListOptions {
                show_hidden: config.general.show_hidden,
            },
            mode: if config.general.dual_panel {
                PanelMode::Dual
            } else {
                PanelMode::Single
            },
        }
    }

    /// Start both panels at explicit paths with default options
    pub fn with_paths<P: Into<PathBuf>>(left: P, right: P) -> Self {
        Self {
            left: PathCursor::new(left.into()),
            right: PathCursor::new(right.into()),
            clipboard: ClipboardState::new(),
            options: ListOptions::default(),
            mode: PanelMode::Dual,
        }
    }

    pub fn current_path(&self, side: Side) -> &Path {
        self.cursor(side).current()
    }

    /// List one panel's current directory
    pub fn list(&self, side: Side) -> Result<Vec<Entry>> {
        Ok(list_directory(self.cursor(side).current(), &self.options)?)
    }

    /// Re-list both panels, left first
    pub fn refresh_both(&self) -> Result<(Vec<Entry>, Vec<Entry>)> {
        Ok((self.list(Side::Left)?, self.list(Side::Right)?))
    }

    /// Enumerate ready drives
    pub fn list_drives(&self) -> Vec<DriveRoot> {
        duopane_fs::list_drives()
    }

    /// Enter a directory entry. The parent sentinel and plain files are
    /// not valid targets here; opening those goes through [`open_entry`].
    ///
    /// [`open_entry`]: PanelController::open_entry
    pub fn navigate_into(&mut self, side: Side, entry: &Entry) -> Result<Vec<Entry>> {
        if entry.is_parent_sentinel() {
            return Err(CoreError::InvalidTarget(
                "Use navigate_back for the parent entry".to_string(),
            ));
        }
        if !entry.is_dir {
            return Err(CoreError::InvalidTarget(format!(
                "Not a directory: {}",
                entry.path.display()
            )));
        }

        self.cursor_mut(side).navigate_to(&entry.path);
        tracing::debug!("{:?} panel entered {}", side, entry.path.display());
        self.list(side)
    }

    /// Pop the panel's history; a no-op at depth 0
    pub fn navigate_back(&mut self, side: Side) -> Result<Vec<Entry>> {
        if self.cursor_mut(side).go_back() {
            tracing::debug!(
                "{:?} panel went back to {}",
                side,
                self.cursor(side).current().display()
            );
        }
        self.list(side)
    }

    /// Jump to a drive root
    pub fn select_drive(&mut self, side: Side, drive: &DriveRoot) -> Result<Vec<Entry>> {
        self.cursor_mut(side).navigate_to(&drive.root);
        tracing::debug!("{:?} panel switched to drive {}", side, drive.name);
        self.list(side)
    }

    /// Open an entry: directories navigate (the sentinel goes back), files
    /// become a hand-off request for the OS default handler.
    pub fn open_entry(&mut self, side: Side, entry: &Entry) -> Result<OpenOutcome> {
        if entry.is_parent_sentinel() {
            return Ok(OpenOutcome::Listing(self.navigate_back(side)?));
        }
        if entry.is_dir {
            return Ok(OpenOutcome::Listing(self.navigate_into(side, entry)?));
        }
        Ok(OpenOutcome::HandOff(entry.path.clone()))
    }

    /// Stage an entry for a later copy-paste
    pub fn copy_to_clipboard(&mut self, entry: &Entry) -> Result<()> {
        self.stage(entry, ClipboardMode::Copy)
    }

    /// Stage an entry for a later cut-paste
    pub fn cut_to_clipboard(&mut self, entry: &Entry) -> Result<()> {
        self.stage(entry, ClipboardMode::Cut)
    }

    fn stage(&mut self, entry: &Entry, mode: ClipboardMode) -> Result<()> {
        if entry.is_parent_sentinel() {
            return Err(CoreError::InvalidTarget(
                "The parent entry cannot be copied".to_string(),
            ));
        }
        self.clipboard.set(entry.path.clone(), entry.is_dir, mode);
        Ok(())
    }

    pub fn can_paste(&self) -> bool {
        !self.clipboard.is_empty()
    }

    /// Paste the pending clipboard entry.
    ///
    /// The target directory is the selected entry when it is a directory,
    /// otherwise the initiating panel's current path. Cut-mode pastes
    /// clear the clipboard on success; copy-mode pastes keep it for a
    /// repeat paste elsewhere.
    pub fn paste(
        &mut self,
        side: Side,
        selected: Option<&Entry>,
    ) -> Result<(Vec<Entry>, Vec<Entry>)> {
        let pending = self.clipboard.pending()?;

        let target_dir = match selected {
            Some(entry) if entry.is_dir && !entry.is_parent_sentinel() => entry.path.clone(),
            _ => self.cursor(side).current().to_path_buf(),
        };

        match pending.mode {
            ClipboardMode::Cut => {
                move_entry(&pending.source, &target_dir)?;
                self.clipboard.clear();
            }
            ClipboardMode::Copy => {
                copy_entry(&pending.source, &target_dir)?;
            }
        }

        self.refresh_both()
    }

    /// Permanently delete an entry and re-list both panels
    pub fn delete(&mut self, entry: &Entry) -> Result<(Vec<Entry>, Vec<Entry>)> {
        if entry.is_parent_sentinel() {
            return Err(CoreError::InvalidTarget(
                "The parent entry cannot be deleted".to_string(),
            ));
        }

        delete_entry(&entry.path)?;
        self.refresh_both()
    }

    /// Group every file under `root` by extension
    pub fn aggregate_by_extension<P: AsRef<Path>>(&self, root: P) -> Result<Vec<ExtensionGroup>> {
        Ok(aggregate_by_extension(root)?)
    }

    pub fn can_preview(&self, entry: &Entry) -> bool {
        !entry.is_dir && !entry.is_parent_sentinel() && is_preview_extension(&entry.path)
    }

    /// Decode an allow-listed text file for display
    pub fn preview(&self, entry: &Entry) -> Result<String> {
        if entry.is_dir {
            return Err(CoreError::InvalidTarget(format!(
                "Not a file: {}",
                entry.path.display()
            )));
        }
        Ok(preview_file(&entry.path)?)
    }

    /// Flip dual/single panel mode and return the new mode. Presentation
    /// advice only: both cursors stay live either way.
    pub fn toggle_panel_mode(&mut self) -> PanelMode {
        self.mode = match self.mode {
            PanelMode::Dual => PanelMode::Single,
            PanelMode::Single => PanelMode::Dual,
        };
        self.mode
    }

    pub fn panel_mode(&self) -> PanelMode {
        self.mode
    }

    fn cursor(&self, side: Side) -> &PathCursor {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn cursor_mut(&mut self, side: Side) -> &mut PathCursor {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct Fixture {
        root: PathBuf,
    }

    impl Fixture {
        fn new(name: &str) -> Self {
            let root = std::env::temp_dir().join(name);
            let _ = fs::remove_dir_all(&root);
            fs::create_dir_all(root.join("left/sub")).unwrap();
            fs::create_dir_all(root.join("right")).unwrap();
            fs::write(root.join("left/doc.txt"), b"doc").unwrap();
            fs::write(root.join("left/sub/nested.md"), b"# nested").unwrap();
            Self { root }
        }

        fn controller(&self) -> PanelController {
            PanelController::with_paths(self.root.join("left"), self.root.join("right"))
        }

        fn entry(&self, rel: &str) -> Entry {
            Entry::from_path(self.root.join(rel)).unwrap()
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    #[test]
    fn test_navigate_into_and_back() {
        let fx = Fixture::new("duopane_ctrl_nav");
        let mut ctrl = fx.controller();

        let listing = ctrl.navigate_into(Side::Left, &fx.entry("left/sub")).unwrap();
        assert_eq!(ctrl.current_path(Side::Left), fx.root.join("left/sub"));
        assert!(listing.iter().any(|e| e.name == "nested.md"));

        ctrl.navigate_back(Side::Left).unwrap();
        assert_eq!(ctrl.current_path(Side::Left), fx.root.join("left"));

        // depth 0: back keeps the current path
        ctrl.navigate_back(Side::Left).unwrap();
        assert_eq!(ctrl.current_path(Side::Left), fx.root.join("left"));
    }

    #[test]
    fn test_back_is_per_panel() {
        let fx = Fixture::new("duopane_ctrl_per_panel");
        let mut ctrl = fx.controller();

        ctrl.navigate_into(Side::Left, &fx.entry("left/sub")).unwrap();
        ctrl.navigate_back(Side::Right).unwrap();

        // the right panel's no-op back must not move the left panel
        assert_eq!(ctrl.current_path(Side::Left), fx.root.join("left/sub"));
        assert_eq!(ctrl.current_path(Side::Right), fx.root.join("right"));
    }

    #[test]
    fn test_navigate_into_rejects_files_and_sentinel() {
        let fx = Fixture::new("duopane_ctrl_invalid");
        let mut ctrl = fx.controller();

        let err = ctrl
            .navigate_into(Side::Left, &fx.entry("left/doc.txt"))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTarget(_)));

        let err = ctrl
            .navigate_into(Side::Left, &Entry::parent_sentinel())
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTarget(_)));
    }

    #[test]
    fn test_open_entry_outcomes() {
        let fx = Fixture::new("duopane_ctrl_open");
        let mut ctrl = fx.controller();

        match ctrl.open_entry(Side::Left, &fx.entry("left/sub")).unwrap() {
            OpenOutcome::Listing(_) => {}
            other => panic!("expected listing, got {:?}", other),
        }

        match ctrl.open_entry(Side::Left, &Entry::parent_sentinel()).unwrap() {
            OpenOutcome::Listing(_) => {
                assert_eq!(ctrl.current_path(Side::Left), fx.root.join("left"));
            }
            other => panic!("expected listing, got {:?}", other),
        }

        match ctrl.open_entry(Side::Left, &fx.entry("left/doc.txt")).unwrap() {
            OpenOutcome::HandOff(path) => assert_eq!(path, fx.root.join("left/doc.txt")),
            other => panic!("expected hand-off, got {:?}", other),
        }
    }

    #[test]
    fn test_paste_copy_retains_clipboard() {
        let fx = Fixture::new("duopane_ctrl_copy");
        let mut ctrl = fx.controller();

        assert!(!ctrl.can_paste());
        ctrl.copy_to_clipboard(&fx.entry("left/doc.txt")).unwrap();
        assert!(ctrl.can_paste());

        let (_, right) = ctrl.paste(Side::Right, None).unwrap();
        assert!(right.iter().any(|e| e.name == "doc.txt"));
        assert!(fx.root.join("left/doc.txt").exists());

        // copy mode: a second paste into another directory still works
        assert!(ctrl.can_paste());
        ctrl.paste(Side::Left, Some(&fx.entry("left/sub"))).unwrap();
        assert!(fx.root.join("left/sub/doc.txt").exists());
    }

    #[test]
    fn test_paste_cut_clears_clipboard() {
        let fx = Fixture::new("duopane_ctrl_cut");
        let mut ctrl = fx.controller();

        ctrl.cut_to_clipboard(&fx.entry("left/doc.txt")).unwrap();
        let (left, right) = ctrl.paste(Side::Right, None).unwrap();

        assert!(!fx.root.join("left/doc.txt").exists());
        assert!(fx.root.join("right/doc.txt").exists());
        assert!(left.iter().all(|e| e.name != "doc.txt"));
        assert!(right.iter().any(|e| e.name == "doc.txt"));
        assert!(!ctrl.can_paste());

        let err = ctrl.paste(Side::Right, None).unwrap_err();
        assert!(matches!(err, CoreError::EmptyClipboard));
    }

    #[test]
    fn test_delete_refreshes_both_panels() {
        let fx = Fixture::new("duopane_ctrl_delete");
        let mut ctrl = fx.controller();

        let (left, _) = ctrl.delete(&fx.entry("left/sub")).unwrap();
        assert!(!fx.root.join("left/sub").exists());
        assert!(left.iter().all(|e| e.name != "sub"));

        let gone = Entry {
            name: "sub".into(),
            path: fx.root.join("left/sub"),
            is_dir: true,
            size: 0,
            modified: None,
        };
        let err = ctrl.delete(&gone).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn test_preview_queries() {
        let fx = Fixture::new("duopane_ctrl_preview");
        let ctrl = fx.controller();

        let doc = fx.entry("left/doc.txt");
        assert!(ctrl.can_preview(&doc));
        assert_eq!(ctrl.preview(&doc).unwrap(), "doc");

        let dir = fx.entry("left/sub");
        assert!(!ctrl.can_preview(&dir));
        assert!(ctrl.preview(&dir).is_err());
    }

    #[test]
    fn test_aggregate_through_controller() {
        let fx = Fixture::new("duopane_ctrl_aggregate");
        let ctrl = fx.controller();

        let groups = ctrl.aggregate_by_extension(fx.root.join("left")).unwrap();
        let extensions: Vec<&str> = groups.iter().map(|g| g.extension.as_str()).collect();
        assert!(extensions.contains(&"txt"));
        assert!(extensions.contains(&"md"));
    }

    #[test]
    fn test_toggle_panel_mode_keeps_cursors() {
        let fx = Fixture::new("duopane_ctrl_mode");
        let mut ctrl = fx.controller();

        ctrl.navigate_into(Side::Left, &fx.entry("left/sub")).unwrap();
        assert_eq!(ctrl.panel_mode(), PanelMode::Dual);
        assert_eq!(ctrl.toggle_panel_mode(), PanelMode::Single);
        assert_eq!(ctrl.toggle_panel_mode(), PanelMode::Dual);
        assert_eq!(ctrl.current_path(Side::Left), fx.root.join("left/sub"));
    }
}
