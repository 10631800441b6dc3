//! Centered single message filling the body (loading, not found, errors).

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget, Wrap},
};

use super::status_level_to_color;
use crate::presentation::view_models::StatusLevel;

pub struct MessageView<'a> {
    message: &'a str,
    level: StatusLevel,
}

impl<'a> MessageView<'a> {
    pub fn new(message: &'a str, level: StatusLevel) -> Self {
        Self { message, level }
    }
}

impl<'a> Widget for MessageView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(area);

        let style = match self.level {
            StatusLevel::Info => Style::default().add_modifier(Modifier::BOLD),
            level => Style::default()
                .fg(status_level_to_color(level))
                .add_modifier(Modifier::BOLD),
        };

        Paragraph::new(self.message)
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(rows[1], buf);
    }
}
