//! Paginated text viewer.
//!
//! A [`Viewer`] is created when the user views a file and dropped when they
//! leave it. The file is read in full on entry and no handle is kept open
//! while scrolling.
use crate::command::ViewerCommand;
use crate::errors::types::BrowseResult;
use crate::filesystem::FileSystem;
use log::{debug, info};
use std::path::{Path, PathBuf};
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerTransition {
    Stay,
    Exit,
}
#[derive(Debug, Clone)]
pub struct Viewer {
    path: PathBuf,
    lines: Vec<String>,
    offset: usize,
    page_height: usize,
    lossy: bool,
}
impl Viewer {
    /// Loads `path` through `fs`. Invalid UTF-8 is replaced rather than
    /// rejected; [`Viewer::is_lossy`] reports whether that happened.
    pub fn open<F: FileSystem>(fs: &F, path: &Path, page_height: usize) -> BrowseResult<Self> {
        let data = fs.read(path).map_err(|e| e.with_context("View"))?;
        let lossy = std::str::from_utf8(&data).is_err();
        let lines = String::from_utf8_lossy(&data)
            .lines()
            .map(|line| line.to_string())
            .collect::<Vec<_>>();
        info!("viewing {:?} ({} lines{})", path, lines.len(), if lossy { ", lossy" } else { "" });
        let mut viewer = Self::from_lines(path, lines, page_height);
        viewer.lossy = lossy;
        Ok(viewer)
    }
    pub fn from_lines(path: impl Into<PathBuf>, lines: Vec<String>, page_height: usize) -> Self {
        Self {
            path: path.into(),
            lines,
            offset: 0,
            page_height: page_height.max(1),
            lossy: false,
        }
    }
    pub fn apply(&mut self, command: ViewerCommand) -> ViewerTransition {
        match command {
            ViewerCommand::ScrollUp => self.scroll_up(),
            ViewerCommand::ScrollDown => self.scroll_down(),
            ViewerCommand::PageUp => {
                self.offset = self.offset.saturating_sub(self.page_height);
            }
            ViewerCommand::PageDown => {
                self.offset = (self.offset + self.page_height).min(self.max_offset());
            }
            ViewerCommand::Top => self.offset = 0,
            ViewerCommand::Bottom => self.offset = self.max_offset(),
            ViewerCommand::Exit => {
                debug!("leaving viewer for {:?}", self.path);
                return ViewerTransition::Exit;
            }
        }
        ViewerTransition::Stay
    }
    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
        }
    }
    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
    }
    /// Adopts a new page height and re-clamps the offset.
    pub fn resize(&mut self, page_height: usize) {
        self.page_height = page_height.max(1);
        self.offset = self.offset.min(self.max_offset());
    }
    /// Last valid page start.
    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.page_height)
    }
    /// The lines currently on screen: `min(page_height, len - offset)` of them.
    pub fn visible(&self) -> &[String] {
        let end = (self.offset + self.page_height).min(self.lines.len());
        &self.lines[self.offset.min(end)..end]
    }
    pub fn offset(&self) -> usize {
        self.offset
    }
    pub fn page_height(&self) -> usize {
        self.page_height
    }
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn is_lossy(&self) -> bool {
        self.lossy
    }
}
