//! ViewModels for the dashboard screen
//!
//! These define the complete data contract for the TUI renderer. The
//! renderer draws the screen from this data plus its own edit buffer.

use serde::Serialize;

use super::common::StatusLevel;

/// Fixed score axis of the history chart
pub const SCORE_AXIS_MIN: i32 = 600;
pub const SCORE_AXIS_MAX: i32 = 850;

/// Complete screen state for TUI rendering
#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    pub title: String,
    pub show_search_bar: bool,
    pub body: BodyViewModel,
    pub status_bar: StatusBarViewModel,
}

/// Main area, one variant per loader state
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BodyViewModel {
    Loading { message: String },
    NotFound { message: String },
    Failed { message: String },
    Report(ReportViewModel),
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportViewModel {
    pub score_card: ScoreCardViewModel,
    pub explanation: String,
    pub contributions: Vec<ContributionViewModel>,
    pub history: HistoryChartViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreCardViewModel {
    pub score: i32,
    pub subject_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContributionViewModel {
    pub feature: String,
    pub direction: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryChartViewModel {
    pub points: Vec<HistoryPointViewModel>,
    pub y_min: i32,
    pub y_max: i32,
    /// Points outside `[y_min, y_max]`; the chart draws them out of frame
    pub out_of_frame: usize,
}

impl HistoryChartViewModel {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryPointViewModel {
    /// ISO date, e.g. "2025-06-01"
    pub date: String,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub active_query: String,
    pub state_label: String,
    pub source_name: String,
    pub status_level: StatusLevel,
}
