use crate::filesystem::{EntryKind, EntryRef, FileSystem};
use crate::format::{fit, format_size, format_time, sanitize_line};
use crate::navigator::Navigator;
use crate::session::{Mode, Session, StatusLevel};
use crate::viewer::Viewer;
use ratatui::{
    layout::Rect, style::{Color, Modifier, Style},
    text::{Line, Span}, widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
const SIZE_WIDTH: usize = 12;
const TIME_WIDTH: usize = 19;
pub struct ListingView;
impl ListingView {
    pub fn render_header<F: FileSystem>(&self, f: &mut Frame, area: Rect, nav: &Navigator<F>) {
        let mut spans = vec![
            Span::styled(
                nav.path().display().to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(marked) = nav.marked() {
            spans.push(Span::raw("  "));
            spans
                .push(
                    Span::styled(
                        format!("[marked: {}]", marked.display()),
                        Style::default().fg(Color::Yellow),
                    ),
                );
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
    /// Paints the rows that fit in `area`. Size and time are looked up here,
    /// for visible rows only.
    pub fn render<F: FileSystem>(&self, f: &mut Frame, area: Rect, nav: &Navigator<F>) {
        let entries = nav.entries();
        if entries.is_empty() {
            let empty = Paragraph::new("(empty)")
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, area);
            return;
        }
        let height = (area.height as usize).max(1);
        let start = (nav.cursor() + 1).saturating_sub(height);
        let end = (start + height).min(entries.len());
        let name_width = (area.width as usize)
            .saturating_sub(SIZE_WIDTH + TIME_WIDTH + 2)
            .max(8);
        let marked = nav.marked();
        let items: Vec<ListItem> = entries[start..end]
            .iter()
            .map(|entry| {
                let path = nav.path().join(&entry.name);
                let text = self.row_text(nav.fs(), entry, &path, name_width);
                let style = if marked == Some(path.as_path()) {
                    Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else if entry.kind == EntryKind::Directory {
                    Style::default().fg(Color::Blue)
                } else {
                    Style::default()
                };
                ListItem::new(Span::styled(text, style))
            })
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default();
        state.select(Some(nav.cursor() - start));
        f.render_stateful_widget(list, area, &mut state);
    }
    fn row_text<F: FileSystem>(
        &self,
        fs: &F,
        entry: &EntryRef,
        path: &std::path::Path,
        name_width: usize,
    ) -> String {
        let mut name = sanitize_line(&entry.display_name());
        if entry.is_dir() {
            name.push('/');
        }
        let (size, modified) = match fs.stat(path) {
            Ok(meta) => {
                let size = match meta.kind {
                    EntryKind::Directory => "DIR".to_string(),
                    _ => format_size(meta.size),
                };
                (size, format_time(meta.modified))
            }
            Err(_) => ("?".to_string(), String::new()),
        };
        format!(
            "{} {:>size_w$} {:>time_w$}", fit(& name, name_width), size, modified, size_w
            = SIZE_WIDTH, time_w = TIME_WIDTH
        )
    }
}
pub struct ViewerView;
impl ViewerView {
    pub fn render(&self, f: &mut Frame, area: Rect, viewer: &Viewer) {
        let lines: Vec<Line> = viewer
            .visible()
            .iter()
            .map(|line| Line::from(sanitize_line(line)))
            .collect();
        f.render_widget(Paragraph::new(lines), area);
    }
}
pub struct StatusView;
impl StatusView {
    pub fn render<F: FileSystem>(&self, f: &mut Frame, area: Rect, session: &Session<F>) {
        let line = match &session.status {
            Some(status) => {
                let style = match status.level {
                    StatusLevel::Error => {
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                    }
                    StatusLevel::Info => Style::default().fg(Color::Green),
                };
                Span::styled(status.text.clone(), style)
            }
            None => {
                Span::styled(
                    self.hint(session),
                    Style::default().fg(Color::White),
                )
            }
        };
        f.render_widget(Paragraph::new(Line::from(line)), area);
    }
    fn hint<F: FileSystem>(&self, session: &Session<F>) -> String {
        match &session.mode {
            Mode::Browsing => session.keys.hint(),
            Mode::Viewing(viewer) => {
                let first = if viewer.line_count() == 0 { 0 } else { viewer.offset() + 1 };
                format!(
                    "{}  {}-{}/{}  ↑↓ Scroll | PgUp/PgDn Page | Esc Back", viewer.path()
                    .display(), first, viewer.offset() + viewer.visible().len(), viewer
                    .line_count()
                )
            }
        }
    }
}
