//! Top-level tab row.
//!
//! Renders every tab destination with its icon, highlighting the tab
//! resolved for the current route.

use crate::nav::Destination;
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs, Widget},
};

pub struct TabRow<'a> {
    tabs: Vec<&'a Destination>,
    active_route: &'a str,
    theme: &'a AppTheme,
    show_icons: bool,
}

impl<'a> TabRow<'a> {
    pub fn new(
        tabs: Vec<&'a Destination>,
        active_route: &'a str,
        theme: &'a AppTheme,
        show_icons: bool,
    ) -> Self {
        Self {
            tabs,
            active_route,
            theme,
            show_icons,
        }
    }
}

impl Widget for TabRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let selected = self
            .tabs
            .iter()
            .position(|d| d.route() == self.active_route)
            .unwrap_or(0);

        let titles: Vec<Line> = self
            .tabs
            .iter()
            .map(|d| {
                let text = if self.show_icons {
                    format!("{} {}", d.icon, d.label)
                } else {
                    d.label.clone()
                };
                Line::from(Span::raw(text))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.window_border))
            .title(Span::styled(
                " tally ",
                Style::default().fg(self.theme.window_title),
            ));

        Tabs::new(titles)
            .block(block)
            .select(selected)
            .style(Style::default().fg(self.theme.tab_inactive))
            .highlight_style(
                Style::default()
                    .fg(self.theme.tab_active)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(Span::raw("│"))
            .render(area, buf);
    }
}
