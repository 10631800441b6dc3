//! Status Bar View Component
//!
//! Active query, loader state and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.status_level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::raw(format!("Query: {} ", self.model.active_query)),
            Span::raw("| "),
            Span::styled(
                format!("{} ", self.model.state_label),
                Style::default().fg(color),
            ),
            Span::raw("| "),
            Span::styled(
                format!("source: {}", self.model.source_name),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let help_line = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw("search "),
            Span::styled("[^R]", Style::default().fg(Color::Yellow)),
            Span::raw("reload "),
            Span::styled("[^U]", Style::default().fg(Color::Yellow)),
            Span::raw("clear "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw("quit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
