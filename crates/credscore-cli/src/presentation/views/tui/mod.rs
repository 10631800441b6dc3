//! TUI Views
//!
//! Stateless Ratatui widgets. Each takes a reference to its ViewModel and
//! maps it to widgets; no calculations beyond layout. StatusLevel → Color
//! mapping happens here.

pub mod contributions;
pub mod explanation;
pub mod history_chart;
pub mod message;
pub mod score_card;
pub mod search_bar;
pub mod status_bar;

pub use contributions::ContributionsView;
pub use explanation::ExplanationView;
pub use history_chart::HistoryChartView;
pub use message::MessageView;
pub use score_card::ScoreCardView;
pub use search_bar::SearchBarView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
