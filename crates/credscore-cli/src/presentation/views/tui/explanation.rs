use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// "Why this score?" paragraph
pub struct ExplanationView<'a> {
    text: &'a str,
}

impl<'a> ExplanationView<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Rows needed to show `text` wrapped at `width` columns, borders included.
    /// Word wrapping can take an extra row, so one is reserved.
    pub fn required_height(text: &str, width: u16) -> u16 {
        let inner_width = width.saturating_sub(2).max(1) as usize;
        let chars = text.chars().count().max(1);
        let rows = chars.div_ceil(inner_width) + 1;
        (rows.min(8) as u16) + 2
    }
}

impl<'a> Widget for ExplanationView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Why this score? ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL);

        Paragraph::new(self.text)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
