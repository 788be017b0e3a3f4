use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::ScrollSpy;
use folio_protocol::{SectionId, SectionView, ThemeToken};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;

use crate::page::{PageRows, ROW_PX, layout_page};

const WHEEL_ROWS: usize = 3;

fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::Background | ThemeToken::Surface => Color::Black,
        ThemeToken::Border | ThemeToken::NavBackground | ThemeToken::ProgressTrack => {
            Color::DarkGray
        }
        ThemeToken::NavText | ThemeToken::TextSecondary => Color::Gray,
        ThemeToken::NavActive | ThemeToken::Accent | ThemeToken::ProgressFill => Color::LightBlue,
        ThemeToken::TextPrimary | ThemeToken::BadgeText => Color::White,
        ThemeToken::BadgeBackground => Color::DarkGray,
        ThemeToken::Highlight => Color::Yellow,
    }
}

/// Terminal modes switched on so far. Dropping it undoes each of them in
/// reverse order, so a failure halfway through setup still cleans up.
#[derive(Debug, Default)]
struct TerminalModes {
    raw_mode: bool,
    alternate_screen: bool,
    mouse_capture: bool,
}

impl TerminalModes {
    fn restore(&mut self, out: &mut impl Write) {
        if std::mem::take(&mut self.mouse_capture) {
            let _ = execute!(out, DisableMouseCapture);
        }
        if std::mem::take(&mut self.alternate_screen) {
            let _ = execute!(out, LeaveAlternateScreen, Show);
        }
        if std::mem::take(&mut self.raw_mode) {
            let _ = disable_raw_mode();
        }
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.restore(&mut stdout());
    }
}

/// Restores the terminal however the viewer exits.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _modes: TerminalModes,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        let mut modes = TerminalModes::default();
        enable_raw_mode()?;
        modes.raw_mode = true;

        let mut out = stdout();
        execute!(out, EnterAlternateScreen)?;
        modes.alternate_screen = true;
        execute!(out, EnableMouseCapture)?;
        modes.mouse_capture = true;

        let terminal = Terminal::new(CrosstermBackend::new(out))?;
        Ok(Self {
            terminal,
            _modes: modes,
        })
    }
}

/// Scroll position and the scroll-spy that follows it.
struct Viewer {
    scroll_row: usize,
    spy: ScrollSpy,
}

impl Viewer {
    fn new() -> Self {
        Self {
            scroll_row: 0,
            spy: ScrollSpy::new(),
        }
    }

    fn scroll_to(&mut self, row: usize, page: &PageRows, visible_rows: usize) {
        let max = page.len().saturating_sub(visible_rows);
        self.scroll_row = row.min(max);
        if let Some(section) = self.spy.on_scroll(self.scroll_row as f64 * ROW_PX, &page.layout) {
            debug!(%section, row = self.scroll_row, "nav highlight moved");
        }
    }

    fn scroll_by(&mut self, delta: isize, page: &PageRows, visible_rows: usize) {
        let row = self.scroll_row.saturating_add_signed(delta);
        self.scroll_to(row, page, visible_rows);
    }
}

pub fn run_viewer(brand: &str, sections: &[SectionView]) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut viewer = Viewer::new();

    loop {
        let size = guard.terminal.size()?;
        let page = layout_page(sections, size.width.saturating_sub(2));
        let visible_rows = usize::from(size.height.saturating_sub(1));
        // Re-clamp after a resize reflowed the page.
        viewer.scroll_to(viewer.scroll_row, &page, visible_rows);

        guard.terminal.draw(|frame| {
            let area = frame.area();

            let nav_area = Rect::new(0, 0, area.width, 1);
            frame.render_widget(nav_line(brand, viewer.spy.active()), nav_area);

            let content_area = Rect::new(1, 1, area.width.saturating_sub(2), area.height.saturating_sub(1));
            let lines: Vec<Line> = page
                .lines
                .iter()
                .skip(viewer.scroll_row)
                .take(visible_rows)
                .map(|l| {
                    let mut style = Style::default().fg(theme_to_color(l.token));
                    if l.bold {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    Line::from(Span::styled(l.text.as_str(), style))
                })
                .collect();
            let body = Paragraph::new(lines).block(Block::default().borders(Borders::NONE));
            frame.render_widget(body, content_area);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let page_step = visible_rows.saturating_sub(2).max(1) as isize;
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Up | KeyCode::Char('k') => viewer.scroll_by(-1, &page, visible_rows),
                KeyCode::Down | KeyCode::Char('j') => viewer.scroll_by(1, &page, visible_rows),
                KeyCode::PageUp => viewer.scroll_by(-page_step, &page, visible_rows),
                KeyCode::PageDown | KeyCode::Char(' ') => {
                    viewer.scroll_by(page_step, &page, visible_rows)
                }
                KeyCode::Home => viewer.scroll_to(0, &page, visible_rows),
                KeyCode::End => viewer.scroll_to(page.len(), &page, visible_rows),
                KeyCode::Char(c @ '1'..='6') => {
                    let index = c as usize - '1' as usize;
                    let id = SectionId::ALL[index];
                    viewer.scroll_to(page.start_of(id), &page, visible_rows);
                }
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => {
                    viewer.scroll_by(WHEEL_ROWS as isize, &page, visible_rows)
                }
                MouseEventKind::ScrollUp => {
                    viewer.scroll_by(-(WHEEL_ROWS as isize), &page, visible_rows)
                }
                _ => {}
            },
            _ => {}
        }
    }

    Ok(())
}

fn nav_line(brand: &str, active: SectionId) -> Paragraph<'static> {
    let bar = Style::default().bg(theme_to_color(ThemeToken::NavBackground));
    let mut spans = vec![Span::styled(
        format!(" {brand} "),
        bar.fg(theme_to_color(ThemeToken::Accent))
            .add_modifier(Modifier::BOLD),
    )];
    for (i, id) in SectionId::ALL.into_iter().enumerate() {
        let style = if id == active {
            bar.fg(theme_to_color(ThemeToken::NavActive))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            bar.fg(theme_to_color(ThemeToken::NavText))
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, id.label()), style));
    }
    spans.push(Span::styled(" | q quit ", bar.fg(Color::Gray)));
    Paragraph::new(Line::from(spans)).style(bar)
}
