//! Terminal setup and per-frame rendering.

use crate::core::AppCore;
use crate::frontend::tui::screen_body::ScreenBody;
use crate::frontend::tui::tab_row::TabRow;
use crate::frontend::{Frontend, FrontendEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use std::io;
use std::time::Duration;

/// TUI frontend using ratatui
///
/// Owns the terminal in raw mode + alternate screen; `cleanup` restores it.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
}

impl TuiFrontend {
    pub fn new(poll_timeout: Duration) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout,
        })
    }

    /// Convert a crossterm event to a FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only key presses; ignore repeats and releases
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::Key {
                    code: key_event.code,
                    modifiers: key_event.modifiers,
                })
            }
            Event::Resize(w, h) => Some(FrontendEvent::Resize {
                width: w,
                height: h,
            }),
            _ => None,
        }
    }

    fn status_line(core: &AppCore, width: u16) -> Line<'static> {
        let theme = core.theme();
        let route = core.dispatcher.current().route().to_string();
        let depth = core.dispatcher.depth();

        let left = format!(" {} · depth {} ", route, depth);
        let right = if core.status_text.is_empty() {
            "Tab switch · Enter open · Esc back · t theme · q quit ".to_string()
        } else {
            format!("{} ", core.status_text)
        };

        let pad = (width as usize)
            .saturating_sub(left.chars().count() + right.chars().count());
        Line::from(vec![
            Span::styled(left, Style::default().fg(theme.status_text)),
            Span::raw(" ".repeat(pad)),
            Span::styled(right, Style::default().fg(theme.status_text)),
        ])
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // First poll waits up to the timeout; follow-ups only drain the queue
        let mut wait = self.poll_timeout;
        while event::poll(wait)? {
            wait = Duration::from_millis(0);
            if let Ok(ev) = event::read() {
                if let Some(frontend_event) = Self::convert_event(ev) {
                    events.push(frontend_event);
                }
            }
        }
        Ok(events)
    }

    fn render(&mut self, core: &AppCore) -> Result<()> {
        // Build the view outside the draw closure so provider failures
        // propagate instead of panicking mid-frame
        let view = core.current_view()?;
        let theme = core.theme();
        let registry = core.dispatcher.registry();
        let tabs = registry.tabs();
        let active = registry
            .current_tab(Some(core.dispatcher.current().route()))
            .route()
            .to_string();
        let entry_state = core.dispatcher.current().state.clone();
        let show_status = core.config.ui.show_status_bar;

        self.terminal.draw(|f| {
            let area = f.area();

            let constraints = if show_status {
                vec![
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ]
            } else {
                vec![Constraint::Length(3), Constraint::Min(0)]
            };
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(area);

            f.render_widget(
                TabRow::new(tabs, &active, &theme, core.config.ui.show_icons),
                rows[0],
            );
            f.render_widget(ScreenBody::new(&view, &entry_state, &theme), rows[1]);

            if show_status {
                let status_area: Rect = rows[2];
                let line = Self::status_line(core, status_area.width);
                f.render_widget(
                    Paragraph::new(line)
                        .style(Style::default().bg(theme.status_background)),
                    status_area,
                );
            }
        })?;

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        self.terminal
            .size()
            .map(|s| (s.width, s.height))
            .unwrap_or((80, 24))
    }
}
