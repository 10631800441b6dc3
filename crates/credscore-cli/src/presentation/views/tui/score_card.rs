//! Score card: the large numeric score and who it belongs to.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::ScoreCardViewModel;

pub struct ScoreCardView<'a> {
    model: &'a ScoreCardViewModel,
}

impl<'a> ScoreCardView<'a> {
    pub fn new(model: &'a ScoreCardViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ScoreCardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                self.model.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Credit Score for ", Style::default().fg(Color::Gray)),
                Span::styled(
                    self.model.subject_name.as_str(),
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
