use crate::filesystem::FileSystem;
use crate::session::{dispatch, Flow, Mode, Session};
use crate::tui::handlers::{is_interrupt, translate_key};
use crate::tui::views::{ListingView, StatusView, ViewerView};
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info, warn};
use ratatui::{backend::CrosstermBackend, layout::{Constraint, Layout}, Terminal};
use std::io;
pub struct BrowserTui<F: FileSystem> {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    session: Session<F>,
    reserved_rows: u16,
    active: bool,
}
impl<F: FileSystem> BrowserTui<F> {
    pub fn new(session: Session<F>, reserved_rows: u16) -> Result<Self> {
        enable_raw_mode()?;
        let terminal = restore_on_error(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                Ok(Terminal::new(CrosstermBackend::new(stdout))?)
            },
            || {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
            },
        )?;
        Ok(Self {
            terminal,
            session,
            reserved_rows,
            active: true,
        })
    }
    /// Render, block on one key, dispatch; until quit.
    pub fn run(&mut self) -> Result<()> {
        info!("TUI started in {:?}", self.session.navigator.path());
        loop {
            self.update_page_height()?;
            self.draw()?;
            let event = event::read()?;
            if is_interrupt(&event) {
                break;
            }
            let Event::Key(key_event) = event else {
                debug!("ignored event {:?}", event);
                continue;
            };
            let Some(key) = translate_key(&key_event) else {
                continue;
            };
            if dispatch(&mut self.session, key) == Flow::Quit {
                break;
            }
        }
        info!("TUI finished");
        Ok(())
    }
    fn update_page_height(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        let page_height = size.height.saturating_sub(self.reserved_rows);
        self.session.set_page_height(page_height as usize);
        Ok(())
    }
    fn draw(&mut self) -> Result<()> {
        let session = &self.session;
        let reserved_rows = self.reserved_rows;
        self.terminal
            .draw(|f| {
                use ratatui::layout::Direction;
                let size = f.size();
                match &session.mode {
                    Mode::Browsing => {
                        let chunks = Layout::default()
                            .direction(Direction::Vertical)
                            .constraints([
                                Constraint::Length(1),
                                Constraint::Min(1),
                                Constraint::Length(1),
                            ])
                            .split(size);
                        let listing = ListingView;
                        listing.render_header(f, chunks[0], &session.navigator);
                        listing.render(f, chunks[1], &session.navigator);
                        StatusView.render(f, chunks[2], session);
                    }
                    Mode::Viewing(viewer) => {
                        let chunks = Layout::default()
                            .direction(Direction::Vertical)
                            .constraints([
                                Constraint::Min(1),
                                Constraint::Length(reserved_rows),
                            ])
                            .split(size);
                        ViewerView.render(f, chunks[0], viewer);
                        StatusView.render(f, chunks[1], session);
                    }
                }
            })?;
        Ok(())
    }
    pub fn shutdown(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
    pub fn session(&self) -> &Session<F> {
        &self.session
    }
}
impl<F: FileSystem> Drop for BrowserTui<F> {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
/// Runs `setup`, undoing terminal changes with `restore` if it fails.
fn restore_on_error<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    let result = setup();
    if let Err(err) = &result {
        warn!("terminal setup failed: {}", err);
        restore();
    }
    result
}
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;
    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(0);
        let result: Result<()> = restore_on_error(
            || Err(anyhow!("no terminal")),
            || restored.set(restored.get() + 1),
        );
        assert!(result.is_err());
        assert_eq!(restored.get(), 1);
    }
    #[test]
    fn test_successful_setup_keeps_terminal() {
        let restored = Cell::new(0);
        let value = restore_on_error(|| Ok(7), || restored.set(restored.get() + 1)).unwrap();
        assert_eq!(value, 7);
        assert_eq!(restored.get(), 0);
    }
}
