//! Feature Contributions grid
//!
//! Two columns, filled row by row, so items keep their input order
//! reading left to right, top to bottom.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::ContributionViewModel;

const COLUMNS: usize = 2;

pub struct ContributionsView<'a> {
    items: &'a [ContributionViewModel],
}

impl<'a> ContributionsView<'a> {
    pub fn new(items: &'a [ContributionViewModel]) -> Self {
        Self { items }
    }

    pub fn row_count(items: usize) -> usize {
        items.div_ceil(COLUMNS)
    }

    /// Rows needed for `items` entries, borders included
    pub fn required_height(items: usize) -> u16 {
        (Self::row_count(items).max(1) as u16) + 2
    }
}

impl<'a> Widget for ContributionsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Feature Contributions ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL);

        let inner = block.inner(area);
        block.render(area, buf);

        if self.items.is_empty() {
            Paragraph::new(Span::styled(
                "No contributing factors reported",
                Style::default().fg(Color::DarkGray),
            ))
            .render(inner, buf);
            return;
        }

        let rows = Self::row_count(self.items.len());
        let row_areas = Layout::vertical(vec![Constraint::Length(1); rows]).split(inner);

        for (row, chunk) in self.items.chunks(COLUMNS).enumerate() {
            let Some(row_area) = row_areas.get(row) else {
                break;
            };
            let cells = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .spacing(2)
                .split(*row_area);

            for (item, cell) in chunk.iter().zip(cells.iter()) {
                render_cell(item, *cell, buf);
            }
        }
    }
}

fn render_cell(item: &ContributionViewModel, area: Rect, buf: &mut Buffer) {
    let label_width = item.direction.chars().count() as u16;
    let parts = Layout::horizontal([Constraint::Min(0), Constraint::Length(label_width)])
        .spacing(1)
        .split(area);

    Paragraph::new(item.feature.as_str())
        .style(Style::default().fg(Color::White))
        .render(parts[0], buf);

    Paragraph::new(item.direction.as_str())
        .style(
            Style::default()
                .fg(status_level_to_color(item.level))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Right)
        .render(parts[1], buf);
}
