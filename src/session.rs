//! Command dispatch.
//!
//! A [`Session`] bundles the navigator with the active mode and the status
//! line. [`dispatch`] feeds it one key at a time; the terminal front end only
//! renders the session and reads keys.
use crate::command::{Command, Key, ViewerCommand};
use crate::config::KeyBindings;
use crate::errors::BrowseError;
use crate::filesystem::{FileSystem, LocalFs};
use crate::navigator::{Navigator, PasteMode};
use crate::viewer::{Viewer, ViewerTransition};
use log::{debug, warn};
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub text: String,
}
impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }
    pub fn error(err: &BrowseError) -> Self {
        Self {
            level: StatusLevel::Error,
            text: err.status_line(),
        }
    }
}
#[derive(Debug)]
pub enum Mode {
    Browsing,
    Viewing(Viewer),
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
pub struct Session<F: FileSystem = LocalFs> {
    pub navigator: Navigator<F>,
    pub mode: Mode,
    pub status: Option<Status>,
    pub keys: KeyBindings,
    page_height: usize,
}
impl<F: FileSystem> Session<F> {
    pub fn new(navigator: Navigator<F>, keys: KeyBindings) -> Self {
        Self {
            navigator,
            mode: Mode::Browsing,
            status: None,
            keys,
            page_height: 1,
        }
    }
    pub fn page_height(&self) -> usize {
        self.page_height
    }
    /// Records the viewer page height offered by the renderer.
    pub fn set_page_height(&mut self, page_height: usize) {
        self.page_height = page_height.max(1);
        if let Mode::Viewing(viewer) = &mut self.mode {
            viewer.resize(self.page_height);
        }
    }
    pub fn viewer(&self) -> Option<&Viewer> {
        match &self.mode {
            Mode::Viewing(viewer) => Some(viewer),
            Mode::Browsing => None,
        }
    }
    fn report(&mut self, err: BrowseError) {
        warn!("{}", err);
        self.status = Some(Status::error(&err));
    }
}
/// Handles one key against `session`.
pub fn dispatch<F: FileSystem>(session: &mut Session<F>, key: Key) -> Flow {
    session.status = None;
    if let Mode::Viewing(viewer) = &mut session.mode {
        if let Some(command) = ViewerCommand::from_key(key, &session.keys) {
            if viewer.apply(command) == ViewerTransition::Exit {
                session.mode = Mode::Browsing;
                if let Err(err) = session.navigator.refresh() {
                    session.report(err);
                }
            }
        }
        return Flow::Continue;
    }
    match Command::from_key(key, &session.keys) {
        Some(command) => execute(session, command),
        None => {
            debug!("unbound key {:?}", key);
            Flow::Continue
        }
    }
}
/// Runs one navigator command, turning failures into status messages.
pub fn execute<F: FileSystem>(session: &mut Session<F>, command: Command) -> Flow {
    debug!("command {:?}", command);
    let nav = &mut session.navigator;
    match command {
        Command::MoveCursor(direction) => nav.move_cursor(direction),
        Command::Enter => {
            if let Err(err) = nav.enter() {
                session.report(err.with_context("Enter"));
            }
        }
        Command::Ascend => {
            if let Err(err) = nav.ascend() {
                session.report(err.with_context("Parent"));
            }
        }
        Command::Delete => {
            match nav.delete() {
                Ok(Some(entry)) => {
                    session.status = Some(
                        Status::info(format!("Deleted {}", entry.display_name())),
                    );
                }
                Ok(None) => {}
                Err(err) => session.report(err.with_context("Delete")),
            }
        }
        Command::Mark => {
            if let Some(path) = nav.mark() {
                session.status = Some(Status::info(format!("Marked {}", path.display())));
            }
        }
        Command::PasteCopy => paste(session, PasteMode::Copy),
        Command::PasteMove => paste(session, PasteMode::Move),
        Command::View => {
            if let Some(path) = nav.view_target() {
                match Viewer::open(nav.fs(), &path, session.page_height) {
                    Ok(viewer) => {
                        if viewer.is_lossy() {
                            session.status = Some(
                                Status::info("Not valid UTF-8, shown with replacement characters"),
                            );
                        }
                        session.mode = Mode::Viewing(viewer);
                    }
                    Err(err) => session.report(err),
                }
            }
        }
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}
fn paste<F: FileSystem>(session: &mut Session<F>, mode: PasteMode) {
    match session.navigator.paste(mode) {
        Ok(Some(dst)) => {
            session.status = Some(
                Status::info(format!("{} to {}", past_tense(mode), dst.display())),
            );
        }
        Ok(None) => session.status = Some(Status::info("Nothing marked")),
        Err(err) => session.report(err.with_context(mode.label())),
    }
}
fn past_tense(mode: PasteMode) -> &'static str {
    match mode {
        PasteMode::Copy => "Copied",
        PasteMode::Move => "Moved",
    }
}
