use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Direction;

/// Complete credit score bundle for one company
///
/// Field names on the wire follow the JSON shape a score endpoint
/// (`GET /api/score?company=<name>`) returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    #[serde(rename = "name")]
    pub subject_name: String,
    pub score: i32,
    pub explanation: String,
    #[serde(default)]
    pub feature_contributions: Vec<FeatureContribution>,
    /// Chronological score history
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
}

impl ScoreReport {
    /// Most recent history point, if any
    pub fn latest(&self) -> Option<&HistoryPoint> {
        self.history.last()
    }
}

/// A named factor and its directional effect on the score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub feature: String,
    pub contribution: Direction,
}

impl FeatureContribution {
    pub fn new(feature: impl Into<String>, contribution: impl Into<Direction>) -> Self {
        Self {
            feature: feature.into(),
            contribution: contribution.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub score: i32,
}

impl HistoryPoint {
    pub fn new(date: NaiveDate, score: i32) -> Self {
        Self { date, score }
    }
}
