use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use credscore_types::{FeatureContribution, HistoryPoint, ScoreReport};

use super::ScoreSource;
use crate::Result;

const SAMPLE_SCORE: i32 = 750;

const SAMPLE_EXPLANATION: &str = "The score is primarily influenced by stable revenue growth and a recent increase in open-source contributions to a key industry project. However, it was slightly lowered by a recent, minor legal filing.";

const SAMPLE_CONTRIBUTIONS: [(&str, &str); 4] = [
    ("Revenue Growth", "Positive"),
    ("Open-Source Contributions", "Strongly Positive"),
    ("Legal Filings", "Negative"),
    ("Debt-to-Equity Ratio", "Neutral"),
];

// (year, month, day, score)
const SAMPLE_HISTORY: [(i32, u32, u32, i32); 6] = [
    (2025, 1, 1, 720),
    (2025, 2, 1, 715),
    (2025, 3, 1, 730),
    (2025, 4, 1, 725),
    (2025, 5, 1, 740),
    (2025, 6, 1, 750),
];

/// Stand-in backend: sleeps for a fixed delay, then answers every query
/// with the same sample report under the queried name.
#[derive(Debug, Clone)]
pub struct MockScoreSource {
    delay: Duration,
}

impl MockScoreSource {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The report this source answers with, without the delay
    pub fn report_for(company: &str) -> ScoreReport {
        ScoreReport {
            subject_name: company.to_string(),
            score: SAMPLE_SCORE,
            explanation: SAMPLE_EXPLANATION.to_string(),
            feature_contributions: SAMPLE_CONTRIBUTIONS
                .iter()
                .map(|(feature, direction)| FeatureContribution::new(*feature, *direction))
                .collect(),
            history: SAMPLE_HISTORY
                .iter()
                .filter_map(|&(y, m, d, score)| {
                    NaiveDate::from_ymd_opt(y, m, d).map(|date| HistoryPoint::new(date, score))
                })
                .collect(),
        }
    }
}

impl Default for MockScoreSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl ScoreSource for MockScoreSource {
    fn fetch_score_report(&self, company: &str) -> Result<Option<ScoreReport>> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(Some(Self::report_for(company)))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
