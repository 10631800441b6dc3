//! Plain-text report for console output

use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{ReportViewModel, StatusLevel};

pub struct ReportView<'a> {
    pub model: &'a ReportViewModel,
    pub enable_color: bool,
}

impl<'a> ReportView<'a> {
    pub fn new(model: &'a ReportViewModel, enable_color: bool) -> Self {
        Self {
            model,
            enable_color,
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.enable_color {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn level(&self, text: &str, level: StatusLevel) -> String {
        if !self.enable_color {
            return text.to_string();
        }
        match level {
            StatusLevel::Success => text.green().to_string(),
            StatusLevel::Info => text.cyan().to_string(),
            StatusLevel::Warning => text.yellow().to_string(),
            StatusLevel::Error => text.red().to_string(),
        }
    }
}

impl<'a> fmt::Display for ReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = &self.model.score_card;
        let score = if self.enable_color {
            card.score.to_string().bold().to_string()
        } else {
            card.score.to_string()
        };
        writeln!(f, "Credit Score for {}: {}", card.subject_name, score)?;
        writeln!(f)?;

        writeln!(f, "{}", self.heading("Why this score?"))?;
        writeln!(f, "  {}", self.model.explanation)?;
        writeln!(f)?;

        writeln!(f, "{}", self.heading("Feature Contributions"))?;
        let width = self
            .model
            .contributions
            .iter()
            .map(|c| c.feature.chars().count())
            .max()
            .unwrap_or(0);
        for item in &self.model.contributions {
            writeln!(
                f,
                "  {:<width$}  {}",
                item.feature,
                self.level(&item.direction, item.level),
                width = width
            )?;
        }
        writeln!(f)?;

        let history = &self.model.history;
        writeln!(
            f,
            "{}",
            self.heading(&format!(
                "Score History (axis {}-{})",
                history.y_min, history.y_max
            ))
        )?;
        if history.points.is_empty() {
            writeln!(f, "  (no history)")?;
        }
        for point in &history.points {
            let marker = if (history.y_min..=history.y_max).contains(&point.score) {
                ""
            } else {
                " (out of range)"
            };
            writeln!(f, "  {}  {}{}", point.date, point.score, marker)?;
        }

        Ok(())
    }
}
