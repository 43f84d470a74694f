//! Filesystem collaborator.
//!
//! The navigator and viewer never touch `std::fs` directly; everything goes
//! through [`FileSystem`] so the state machine can be driven against a
//! temporary directory or a failure-injecting implementation in tests.
use crate::errors::{BrowseError, ErrorKind};
use crate::errors::types::BrowseResult;
use log::{debug, info, warn};
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
pub mod local;
pub use local::LocalFs;
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}
/// One entry of a listing snapshot. Metadata beyond the kind is fetched
/// through [`FileSystem::stat`] when painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRef {
    pub name: OsString,
    pub kind: EntryKind,
}
impl EntryRef {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self { name: name.into(), kind }
    }
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
    pub fn is_hidden(&self) -> bool {
        self.display_name().starts_with('.')
    }
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub kind: EntryKind,
    pub size: u64,
    pub modified: Option<SystemTime>,
}
pub trait FileSystem {
    /// Lists `dir` as one ordered snapshot.
    fn list(&self, dir: &Path) -> BrowseResult<Vec<EntryRef>>;
    fn stat(&self, path: &Path) -> BrowseResult<Metadata>;
    /// True if anything, including a dangling symlink, occupies `path`.
    fn exists(&self, path: &Path) -> bool;
    fn canonicalize(&self, path: &Path) -> BrowseResult<PathBuf>;
    fn read(&self, path: &Path) -> BrowseResult<Vec<u8>>;
    fn remove(&self, path: &Path) -> BrowseResult<()>;
    fn remove_recursive(&self, path: &Path) -> BrowseResult<()>;
    /// Copies a single file. Must fail with `AlreadyExists` rather than
    /// overwrite `dst`.
    fn copy(&self, src: &Path, dst: &Path) -> BrowseResult<()>;
    fn copy_recursive(&self, src: &Path, dst: &Path) -> BrowseResult<()>;
    fn rename(&self, src: &Path, dst: &Path) -> BrowseResult<()>;
    /// Removes `path`, recursing into directories.
    fn remove_entry(&self, path: &Path, kind: EntryKind) -> BrowseResult<()> {
        match kind {
            EntryKind::Directory => self.remove_recursive(path),
            EntryKind::File | EntryKind::Other => self.remove(path),
        }
    }
    /// Duplicates `src` at `dst`, recursing into directories.
    fn copy_entry(&self, src: &Path, dst: &Path) -> BrowseResult<()> {
        match self.stat(src)?.kind {
            EntryKind::Directory => self.copy_recursive(src, dst),
            EntryKind::File => self.copy(src, dst),
            EntryKind::Other => Err(BrowseError::not_regular(src)),
        }
    }
    /// Moves `src` to `dst`. A rename across devices falls back to copying
    /// and then removing the source; a copy that fails halfway is removed
    /// again so only the source remains.
    fn relocate(&self, src: &Path, dst: &Path) -> BrowseResult<()> {
        match self.rename(src, dst) {
            Err(err) if err.kind == ErrorKind::CrossDeviceMove => {
                debug!("rename {:?} -> {:?} crosses devices, copying", src, dst);
                if self.exists(dst) {
                    return Err(BrowseError::already_exists(dst));
                }
                let kind = self.stat(src)?.kind;
                if let Err(err) = self.copy_entry(src, dst) {
                    if self.exists(dst) {
                        match self.remove_entry(dst, kind) {
                            Ok(()) => debug!("removed partial copy {:?}", dst),
                            Err(e) => warn!("partial copy {:?} left behind: {}", dst, e),
                        }
                    }
                    return Err(err);
                }
                self.remove_entry(src, kind)
                    .map_err(|e| e.with_context("copied but could not remove source"))?;
                info!("moved {:?} to {:?} by copy", src, dst);
                Ok(())
            }
            other => other,
        }
    }
}
/// Refuses to place a directory inside itself.
pub fn check_not_nested(src: &Path, dst: &Path) -> BrowseResult<()> {
    if dst.starts_with(src) {
        return Err(
            BrowseError::new(
                    ErrorKind::InvalidTarget,
                    "cannot place a directory inside itself",
                )
                .with_path(dst),
        );
    }
    Ok(())
}
