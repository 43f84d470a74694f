use super::{EntryKind, EntryRef, FileSystem, Metadata};
use crate::errors::BrowseError;
use crate::errors::types::BrowseResult;
use log::{debug, warn};
use std::{
    cmp::Ordering, fs, io, path::{Path, PathBuf},
};
/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Clone)]
pub struct LocalFs {
    pub show_hidden: bool,
    pub dirs_first: bool,
}
impl Default for LocalFs {
    fn default() -> Self {
        Self {
            show_hidden: true,
            dirs_first: true,
        }
    }
}
impl LocalFs {
    pub fn new(show_hidden: bool, dirs_first: bool) -> Self {
        Self { show_hidden, dirs_first }
    }
    fn sort(&self, entries: &mut [EntryRef]) {
        let dirs_first = self.dirs_first;
        entries
            .sort_by(|a, b| {
                if dirs_first && a.is_dir() != b.is_dir() {
                    return if a.is_dir() { Ordering::Less } else { Ordering::Greater };
                }
                a.display_name()
                    .to_lowercase()
                    .cmp(&b.display_name().to_lowercase())
                    .then_with(|| a.name.cmp(&b.name))
            });
    }
}
fn kind_of(meta: &fs::Metadata) -> EntryKind {
    if meta.is_dir() {
        EntryKind::Directory
    } else if meta.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
/// Resolves the kind of `path`, following symlinks. Dangling links are `Other`.
fn resolve_kind(path: &Path) -> io::Result<EntryKind> {
    match fs::metadata(path) {
        Ok(meta) => Ok(kind_of(&meta)),
        Err(_) => fs::symlink_metadata(path).map(|_| EntryKind::Other),
    }
}
impl FileSystem for LocalFs {
    fn list(&self, dir: &Path) -> BrowseResult<Vec<EntryRef>> {
        let read = fs::read_dir(dir).map_err(|e| BrowseError::from_io(e, dir))?;
        let mut entries = Vec::new();
        for item in read {
            let item = item.map_err(|e| BrowseError::from_io(e, dir))?;
            let path = item.path();
            let kind = match resolve_kind(&path) {
                Ok(kind) => kind,
                Err(e) => {
                    debug!("entry {:?} vanished during listing: {}", path, e);
                    continue;
                }
            };
            let entry = EntryRef::new(item.file_name(), kind);
            if !self.show_hidden && entry.is_hidden() {
                continue;
            }
            entries.push(entry);
        }
        self.sort(&mut entries);
        Ok(entries)
    }
    fn stat(&self, path: &Path) -> BrowseResult<Metadata> {
        let meta = fs::metadata(path).map_err(|e| BrowseError::from_io(e, path))?;
        Ok(Metadata {
            kind: kind_of(&meta),
            size: meta.len(),
            modified: meta.modified().ok(),
        })
    }
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }
    fn canonicalize(&self, path: &Path) -> BrowseResult<PathBuf> {
        fs::canonicalize(path).map_err(|e| BrowseError::from_io(e, path))
    }
    fn read(&self, path: &Path) -> BrowseResult<Vec<u8>> {
        fs::read(path).map_err(|e| BrowseError::from_io(e, path))
    }
    fn remove(&self, path: &Path) -> BrowseResult<()> {
        fs::remove_file(path).map_err(|e| BrowseError::from_io(e, path))
    }
    fn remove_recursive(&self, path: &Path) -> BrowseResult<()> {
        let meta = fs::symlink_metadata(path)
            .map_err(|e| BrowseError::from_io(e, path))?;
        if meta.file_type().is_symlink() {
            // Only the link goes, never the tree it points at.
            return self.remove(path);
        }
        fs::remove_dir_all(path).map_err(|e| BrowseError::from_io(e, path))
    }
    fn copy(&self, src: &Path, dst: &Path) -> BrowseResult<()> {
        let meta = fs::metadata(src).map_err(|e| BrowseError::from_io(e, src))?;
        // Opening a FIFO blocks until a writer shows up.
        if !meta.is_file() {
            return Err(BrowseError::not_regular(src));
        }
        let mut reader = fs::File::open(src).map_err(|e| BrowseError::from_io(e, src))?;
        let mut writer = fs::File::create_new(dst)
            .map_err(|e| BrowseError::from_io(e, dst))?;
        io::copy(&mut reader, &mut writer).map_err(|e| BrowseError::from_io(e, dst))?;
        let _ = fs::set_permissions(dst, meta.permissions());
        Ok(())
    }
    fn copy_recursive(&self, src: &Path, dst: &Path) -> BrowseResult<()> {
        fs::create_dir(dst).map_err(|e| BrowseError::from_io(e, dst))?;
        let read = fs::read_dir(src).map_err(|e| BrowseError::from_io(e, src))?;
        for item in read {
            let item = item.map_err(|e| BrowseError::from_io(e, src))?;
            let from = item.path();
            let to = dst.join(item.file_name());
            let file_type = item.file_type().map_err(|e| BrowseError::from_io(e, &from))?;
            if file_type.is_symlink() {
                copy_symlink(&from, &to)?;
            } else if file_type.is_dir() {
                self.copy_recursive(&from, &to)?;
            } else if file_type.is_file() {
                self.copy(&from, &to)?;
            } else {
                warn!("skipping special file {:?}", from);
            }
        }
        Ok(())
    }
    fn rename(&self, src: &Path, dst: &Path) -> BrowseResult<()> {
        fs::rename(src, dst).map_err(|e| BrowseError::from_io(e, src))
    }
}
#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> BrowseResult<()> {
    let target = fs::read_link(from).map_err(|e| BrowseError::from_io(e, from))?;
    std::os::unix::fs::symlink(target, to).map_err(|e| BrowseError::from_io(e, to))
}
#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> BrowseResult<()> {
    if fs::metadata(from).map(|m| m.is_dir()).unwrap_or(false) {
        LocalFs::default().copy_recursive(from, to)
    } else {
        LocalFs::default().copy(from, to)
    }
}
