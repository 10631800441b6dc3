//! Score History line chart
//!
//! Scores are plotted against their position in the history; dates become
//! x-axis labels. The y-axis is pinned to the view model's bounds, so
//! points outside it fall out of frame instead of rescaling the chart.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget},
};

use crate::presentation::view_models::HistoryChartViewModel;

const LINE_COLOR: Color = Color::Rgb(79, 70, 229);

pub struct HistoryChartView<'a> {
    model: &'a HistoryChartViewModel,
}

impl<'a> HistoryChartView<'a> {
    pub fn new(model: &'a HistoryChartViewModel) -> Self {
        Self { model }
    }

    fn block(&self) -> Block<'static> {
        let title = if self.model.out_of_frame > 0 {
            format!(
                " Score History ({} out of range) ",
                self.model.out_of_frame
            )
        } else {
            " Score History ".to_string()
        };

        Block::default()
            .title(title)
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
    }

    fn x_labels(&self) -> Vec<Span<'static>> {
        let points = &self.model.points;
        match points.len() {
            0 => Vec::new(),
            1 => vec![Span::raw(points[0].date.clone())],
            2 => vec![
                Span::raw(points[0].date.clone()),
                Span::raw(points[1].date.clone()),
            ],
            n => vec![
                Span::raw(points[0].date.clone()),
                Span::raw(points[(n - 1) / 2].date.clone()),
                Span::raw(points[n - 1].date.clone()),
            ],
        }
    }

    fn y_labels(&self) -> Vec<Span<'static>> {
        let (min, max) = (self.model.y_min, self.model.y_max);
        vec![
            Span::raw(min.to_string()),
            Span::raw(((min + max) / 2).to_string()),
            Span::raw(max.to_string()),
        ]
    }
}

impl<'a> Widget for HistoryChartView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.model.is_empty() {
            Paragraph::new(Span::styled(
                "No history available",
                Style::default().fg(Color::DarkGray),
            ))
            .block(self.block())
            .render(area, buf);
            return;
        }

        let data: Vec<(f64, f64)> = self
            .model
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.score as f64))
            .collect();
        let x_max = data.len().saturating_sub(1).max(1) as f64;

        let dataset = Dataset::default()
            .name("score")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(LINE_COLOR))
            .data(&data);

        Chart::new(vec![dataset])
            .block(self.block())
            .legend_position(None)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, x_max])
                    .labels(self.x_labels()),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds([self.model.y_min as f64, self.model.y_max as f64])
                    .labels(self.y_labels()),
            )
            .render(area, buf);
    }
}
