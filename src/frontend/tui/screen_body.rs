//! Screen body widget.
//!
//! Turns the frontend-agnostic `ScreenView` into styled lines: content
//! first, then the selectable action rows with a highlight bar driven by
//! the entry's screen state.

use crate::nav::ScreenState;
use crate::screens::{LineKind, ScreenView};
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ScreenBody<'a> {
    view: &'a ScreenView,
    state: &'a ScreenState,
    theme: &'a AppTheme,
}

impl<'a> ScreenBody<'a> {
    pub fn new(view: &'a ScreenView, state: &'a ScreenState, theme: &'a AppTheme) -> Self {
        Self { view, state, theme }
    }

    fn line_style(&self, kind: LineKind) -> Style {
        match kind {
            LineKind::Heading => Style::default()
                .fg(self.theme.text_heading)
                .add_modifier(Modifier::BOLD),
            LineKind::Body => Style::default().fg(self.theme.text_primary),
            LineKind::Muted => Style::default().fg(self.theme.text_secondary),
            LineKind::Positive => Style::default().fg(self.theme.amount_positive),
            LineKind::Negative => Style::default().fg(self.theme.amount_negative),
        }
    }
}

impl Widget for ScreenBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.window_border))
            .title(Span::styled(
                format!(" {} ", self.view.title),
                Style::default()
                    .fg(self.theme.window_title)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner_width = area.width.saturating_sub(2) as usize;

        let mut lines: Vec<Line> = self
            .view
            .lines
            .iter()
            .map(|l| Line::from(Span::styled(l.text.clone(), self.line_style(l.kind))))
            .collect();

        if !self.view.actions.is_empty() {
            lines.push(Line::from(""));
        }

        for (index, action) in self.view.actions.iter().enumerate() {
            let selected = index == self.state.selected;
            let style = if selected {
                Style::default()
                    .fg(self.theme.action_selected_fg)
                    .bg(self.theme.action_selected_bg)
            } else {
                Style::default().fg(self.theme.action_normal)
            };

            let marker = if selected { "▸ " } else { "  " };
            let left = format!("{}{}", marker, action.label);
            let text = if action.detail.is_empty() {
                left
            } else {
                // Right-align the detail column within the inner width
                let pad = inner_width
                    .saturating_sub(left.chars().count() + action.detail.chars().count())
                    .max(1);
                format!("{}{}{}", left, " ".repeat(pad), action.detail)
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        Paragraph::new(Text::from(lines))
            .block(block)
            .style(Style::default().bg(self.theme.background_primary))
            .scroll((self.state.scroll, 0))
            .render(area, buf);
    }
}
