use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Enter company name...";

/// Search field plus its trigger hint
///
/// Only draws the edit buffer; the renderer places the terminal cursor.
pub struct SearchBarView<'a> {
    input: &'a str,
}

impl<'a> SearchBarView<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Where the text of the field starts, for cursor placement
    pub fn text_area(area: Rect) -> Rect {
        let field = Self::split(area)[0];
        Block::default().borders(Borders::ALL).inner(field)
    }

    fn split(area: Rect) -> std::rc::Rc<[Rect]> {
        Layout::horizontal([Constraint::Min(10), Constraint::Length(12)]).split(area)
    }
}

impl<'a> Widget for SearchBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let parts = Self::split(area);

        let field = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightBlue))
            .title(" Company ");

        let text = if self.input.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(self.input)
        };
        Paragraph::new(text).block(field).render(parts[0], buf);

        let button = Paragraph::new(Line::from(vec![
            Span::styled("⏎ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                "Search",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        button.render(parts[1], buf);
    }
}
