//! Directory navigation state machine.
//!
//! [`Navigator`] owns the current directory snapshot, the cursor and the
//! single-entry clipboard. Every operation either succeeds and leaves a
//! freshly listed snapshot behind, or fails and leaves the previous state in
//! place so the caller can report the error and keep going.
use crate::command::Direction;
use crate::errors::{BrowseError, ErrorKind};
use crate::errors::types::BrowseResult;
use crate::filesystem::{check_not_nested, EntryKind, EntryRef, FileSystem, LocalFs};
use crate::format::paste_destination;
use log::{debug, info};
use std::path::{Path, PathBuf};
#[derive(Debug, Clone)]
pub struct DirectoryState {
    pub path: PathBuf,
    pub entries: Vec<EntryRef>,
    pub cursor: usize,
}
impl DirectoryState {
    fn snapshot(path: PathBuf, entries: Vec<EntryRef>) -> Self {
        Self { path, entries, cursor: 0 }
    }
    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
    }
}
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    marked: Option<PathBuf>,
}
impl Clipboard {
    pub fn marked(&self) -> Option<&Path> {
        self.marked.as_deref()
    }
    pub fn set(&mut self, path: PathBuf) {
        self.marked = Some(path);
    }
    pub fn clear(&mut self) {
        self.marked = None;
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteMode {
    Copy,
    Move,
}
impl PasteMode {
    pub fn label(&self) -> &'static str {
        match self {
            PasteMode::Copy => "Copy",
            PasteMode::Move => "Move",
        }
    }
}
pub struct Navigator<F: FileSystem = LocalFs> {
    fs: F,
    dir: DirectoryState,
    clipboard: Clipboard,
}
impl<F: FileSystem> Navigator<F> {
    /// Starts at `start`, resolved to a canonical path and listed.
    pub fn open(fs: F, start: &Path) -> BrowseResult<Self> {
        let path = fs.canonicalize(start)?;
        let entries = fs.list(&path)?;
        info!("Browsing {:?} ({} entries)", path, entries.len());
        Ok(Self {
            fs,
            dir: DirectoryState::snapshot(path, entries),
            clipboard: Clipboard::default(),
        })
    }
    pub fn path(&self) -> &Path {
        &self.dir.path
    }
    pub fn entries(&self) -> &[EntryRef] {
        &self.dir.entries
    }
    pub fn cursor(&self) -> usize {
        self.dir.cursor
    }
    pub fn state(&self) -> &DirectoryState {
        &self.dir
    }
    pub fn marked(&self) -> Option<&Path> {
        self.clipboard.marked()
    }
    pub fn fs(&self) -> &F {
        &self.fs
    }
    pub fn fs_mut(&mut self) -> &mut F {
        &mut self.fs
    }
    pub fn selected(&self) -> Option<&EntryRef> {
        self.dir.entries.get(self.dir.cursor)
    }
    pub fn selected_path(&self) -> Option<PathBuf> {
        self.selected().map(|entry| self.dir.path.join(&entry.name))
    }
    /// Re-lists the current directory, replacing the snapshot wholesale and
    /// clamping the cursor into the new listing.
    pub fn refresh(&mut self) -> BrowseResult<()> {
        let entries = self.fs.list(&self.dir.path)?;
        debug!("refreshed {:?}: {} entries", self.dir.path, entries.len());
        self.dir.entries = entries;
        self.dir.clamp_cursor();
        Ok(())
    }
    pub fn move_cursor(&mut self, direction: Direction) {
        if self.dir.entries.is_empty() {
            return;
        }
        match direction {
            Direction::Up => {
                if self.dir.cursor > 0 {
                    self.dir.cursor -= 1;
                }
            }
            Direction::Down => {
                if self.dir.cursor + 1 < self.dir.entries.len() {
                    self.dir.cursor += 1;
                }
            }
        }
    }
    /// Descends into the selected directory. Returns `false` when the
    /// selection is not a directory. On failure the current directory is kept.
    pub fn enter(&mut self) -> BrowseResult<bool> {
        let Some(entry) = self.selected() else {
            return Ok(false);
        };
        if entry.kind != EntryKind::Directory {
            return Ok(false);
        }
        let target = self.dir.path.join(&entry.name);
        let path = self.fs.canonicalize(&target)?;
        let entries = self.fs.list(&path)?;
        info!("Entered {:?}", path);
        self.dir = DirectoryState::snapshot(path, entries);
        Ok(true)
    }
    /// Moves to the parent directory. Returns `false` at the filesystem root.
    pub fn ascend(&mut self) -> BrowseResult<bool> {
        let Some(parent) = self.dir.path.parent() else {
            return Ok(false);
        };
        let parent = parent.to_path_buf();
        let entries = self.fs.list(&parent)?;
        info!("Ascended to {:?}", parent);
        self.dir = DirectoryState::snapshot(parent, entries);
        Ok(true)
    }
    /// Removes the selected entry, recursively for directories. The removed
    /// entry is returned; `None` means the listing was empty.
    ///
    /// A failed removal leaves the snapshot untouched.
    pub fn delete(&mut self) -> BrowseResult<Option<EntryRef>> {
        let Some(entry) = self.selected().cloned() else {
            return Ok(None);
        };
        let target = self.dir.path.join(&entry.name);
        self.fs.remove_entry(&target, entry.kind)?;
        info!("Deleted {:?}", target);
        self.refresh().map_err(|e| e.with_context("Deleted, but refresh failed"))?;
        Ok(Some(entry))
    }
    /// Marks the selected entry for a later paste, replacing any prior mark.
    pub fn mark(&mut self) -> Option<&Path> {
        let path = self.selected_path()?;
        debug!("marked {:?}", path);
        self.clipboard.set(path);
        self.clipboard.marked()
    }
    /// Copies or moves the marked entry into the current directory under its
    /// own name. `Ok(None)` means nothing was marked. The mark is cleared
    /// only on success.
    pub fn paste(&mut self, mode: PasteMode) -> BrowseResult<Option<PathBuf>> {
        let Some(marked) = self.clipboard.marked().map(Path::to_path_buf) else {
            return Ok(None);
        };
        let dst = paste_destination(&marked, &self.dir.path)
            .ok_or_else(|| {
                BrowseError::new(ErrorKind::InvalidTarget, "marked entry has no name")
                    .with_path(&marked)
            })?;
        if self.fs.exists(&dst) {
            return Err(BrowseError::already_exists(&dst));
        }
        let kind = self.fs.stat(&marked)?.kind;
        if kind == EntryKind::Directory {
            // A symlinked directory is nested by where it points, not by name.
            let real = self.fs.canonicalize(&marked)?;
            check_not_nested(&real, &dst)?;
        }
        match mode {
            PasteMode::Copy => self.fs.copy_entry(&marked, &dst)?,
            PasteMode::Move => self.fs.relocate(&marked, &dst)?,
        }
        info!("{} {:?} -> {:?}", mode.label(), marked, dst);
        self.clipboard.clear();
        self.refresh()
            .map_err(|e| e.with_context(&format!("{} done, but refresh failed", mode.label())))?;
        Ok(Some(dst))
    }
    /// Path of the selected entry if it is a regular file.
    pub fn view_target(&self) -> Option<PathBuf> {
        match self.selected() {
            Some(entry) if entry.kind == EntryKind::File => self.selected_path(),
            _ => None,
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    fn names<F: FileSystem>(nav: &Navigator<F>) -> Vec<String> {
        nav.entries().iter().map(|e| e.display_name().to_string()).collect()
    }
    #[test]
    fn test_open_canonicalizes_start() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        let start = temp_dir.path().join("sub").join("..");
        let nav = Navigator::open(LocalFs::default(), &start).unwrap();
        assert_eq!(nav.path(), fs::canonicalize(temp_dir.path()).unwrap());
        assert_eq!(nav.cursor(), 0);
        assert!(nav.marked().is_none());
    }
    #[test]
    fn test_cursor_bounds() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("a"), "").unwrap();
        fs::write(temp_dir.path().join("b"), "").unwrap();
        let mut nav = Navigator::open(LocalFs::default(), temp_dir.path()).unwrap();
        nav.move_cursor(Direction::Up);
        nav.move_cursor(Direction::Up);
        assert_eq!(nav.cursor(), 0);
        nav.move_cursor(Direction::Down);
        nav.move_cursor(Direction::Down);
        nav.move_cursor(Direction::Down);
        assert_eq!(nav.cursor(), 1);
    }
    #[test]
    fn test_enter_file_is_noop() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "").unwrap();
        let mut nav = Navigator::open(LocalFs::default(), temp_dir.path()).unwrap();
        let before = nav.path().to_path_buf();
        assert!(! nav.enter().unwrap());
        assert_eq!(nav.path(), before);
    }
    #[test]
    fn test_ascend_at_root_is_noop() {
        let mut nav = Navigator::open(LocalFs::default(), Path::new("/")).unwrap();
        assert!(! nav.ascend().unwrap());
        assert_eq!(nav.path(), Path::new("/"));
    }
    #[test]
    fn test_delete_last_entry_clamps_cursor() {
        let temp_dir = tempdir().unwrap();
        for name in ["a", "b", "c"] {
            fs::write(temp_dir.path().join(name), name).unwrap();
        }
        let mut nav = Navigator::open(LocalFs::default(), temp_dir.path()).unwrap();
        nav.move_cursor(Direction::Down);
        nav.move_cursor(Direction::Down);
        let removed = nav.delete().unwrap().unwrap();
        assert_eq!(removed.display_name(), "c");
        assert_eq!(names(&nav), vec!["a", "b"]);
        assert_eq!(nav.cursor(), 1);
    }
    #[test]
    fn test_delete_directory_is_recursive() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path().join("tree");
        fs::create_dir_all(dir.join("inner")).unwrap();
        fs::write(dir.join("inner").join("leaf.txt"), "leaf").unwrap();
        let mut nav = Navigator::open(LocalFs::default(), temp_dir.path()).unwrap();
        nav.delete().unwrap();
        assert!(! dir.exists());
        assert!(nav.entries().is_empty());
    }
    #[test]
    fn test_mark_overwrites_previous_mark() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("a"), "").unwrap();
        fs::write(temp_dir.path().join("b"), "").unwrap();
        let mut nav = Navigator::open(LocalFs::default(), temp_dir.path()).unwrap();
        nav.mark();
        nav.move_cursor(Direction::Down);
        nav.mark();
        assert_eq!(nav.marked(), Some(nav.path().join("b").as_path()));
    }
    #[test]
    fn test_paste_without_mark_is_noop() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("a"), "").unwrap();
        let mut nav = Navigator::open(LocalFs::default(), temp_dir.path()).unwrap();
        assert_eq!(nav.paste(PasteMode::Copy).unwrap(), None);
        assert_eq!(nav.paste(PasteMode::Move).unwrap(), None);
        assert_eq!(names(&nav), vec!["a"]);
    }
    #[test]
    fn test_move_into_same_directory_keeps_mark() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("a"), "data").unwrap();
        let mut nav = Navigator::open(LocalFs::default(), temp_dir.path()).unwrap();
        nav.mark();
        let err = nav.paste(PasteMode::Move).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyExists);
        assert!(nav.marked().is_some());
        assert_eq!(fs::read_to_string(temp_dir.path().join("a")).unwrap(), "data");
    }
    #[test]
    fn test_copy_directory_into_itself_is_rejected() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("outer")).unwrap();
        let mut nav = Navigator::open(LocalFs::default(), temp_dir.path()).unwrap();
        nav.mark();
        assert!(nav.enter().unwrap());
        let err = nav.paste(PasteMode::Copy).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTarget);
        assert!(nav.marked().is_some());
        assert!(nav.entries().is_empty());
    }
    #[test]
    fn test_move_relocates_and_clears_mark() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("dest")).unwrap();
        fs::write(temp_dir.path().join("file.txt"), "moving").unwrap();
        let mut nav = Navigator::open(LocalFs::default(), temp_dir.path()).unwrap();
        nav.move_cursor(Direction::Down);
        nav.mark();
        nav.move_cursor(Direction::Up);
        assert!(nav.enter().unwrap());
        let dst = nav.paste(PasteMode::Move).unwrap().unwrap();
        assert_eq!(fs::read_to_string(&dst).unwrap(), "moving");
        assert!(! temp_dir.path().join("file.txt").exists());
        assert!(nav.marked().is_none());
        assert_eq!(names(&nav), vec!["file.txt"]);
    }
    #[test]
    fn test_view_target_only_for_files() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("dir")).unwrap();
        fs::write(temp_dir.path().join("file.txt"), "x").unwrap();
        let mut nav = Navigator::open(LocalFs::default(), temp_dir.path()).unwrap();
        assert_eq!(nav.view_target(), None);
        nav.move_cursor(Direction::Down);
        assert_eq!(nav.view_target(), Some(nav.path().join("file.txt")));
    }
}
