//! Dashboard presenter
//!
//! Pure functions turning loader state into ViewModels. No I/O, no timing.

use credscore_runtime::{LoadState, UiConfig};
use credscore_types::ScoreReport;

use crate::presentation::view_models::{
    BodyViewModel, ContributionViewModel, HistoryChartViewModel, HistoryPointViewModel,
    ReportViewModel, SCORE_AXIS_MAX, SCORE_AXIS_MIN, ScoreCardViewModel, ScreenViewModel,
    StatusBarViewModel, StatusLevel,
};

pub const DASHBOARD_TITLE: &str = "Explainable Credit Intelligence Dashboard";
pub const LOADING_MESSAGE: &str = "Loading data...";
pub const NOT_FOUND_MESSAGE: &str = "Company not found.";

pub fn build_screen_view_model(
    state: &LoadState,
    active_query: &str,
    source_name: &str,
    ui: &UiConfig,
) -> ScreenViewModel {
    let body = match state {
        LoadState::Loading { .. } => BodyViewModel::Loading {
            message: LOADING_MESSAGE.to_string(),
        },
        LoadState::NotFound { .. } => BodyViewModel::NotFound {
            message: NOT_FOUND_MESSAGE.to_string(),
        },
        LoadState::Failed { query, message } => BodyViewModel::Failed {
            message: format!("Failed to load score for '{}': {}", query, message),
        },
        LoadState::Loaded(report) => BodyViewModel::Report(build_report_view_model(report)),
    };

    let show_search_bar = ui.search_bar_always_visible || matches!(state, LoadState::Loaded(_));

    let status_level = match state {
        LoadState::Loading { .. } => StatusLevel::Info,
        LoadState::Loaded(_) => StatusLevel::Success,
        LoadState::NotFound { .. } => StatusLevel::Warning,
        LoadState::Failed { .. } => StatusLevel::Error,
    };

    ScreenViewModel {
        title: DASHBOARD_TITLE.to_string(),
        show_search_bar,
        body,
        status_bar: StatusBarViewModel {
            active_query: active_query.to_string(),
            state_label: state.label().to_string(),
            source_name: source_name.to_string(),
            status_level,
        },
    }
}

pub fn build_report_view_model(report: &ScoreReport) -> ReportViewModel {
    let contributions = report
        .feature_contributions
        .iter()
        .map(|c| ContributionViewModel {
            feature: c.feature.clone(),
            direction: c.contribution.label().to_string(),
            level: if c.contribution.is_positive() {
                StatusLevel::Success
            } else {
                StatusLevel::Error
            },
        })
        .collect();

    let points: Vec<HistoryPointViewModel> = report
        .history
        .iter()
        .map(|p| HistoryPointViewModel {
            date: p.date.format("%Y-%m-%d").to_string(),
            score: p.score,
        })
        .collect();

    let out_of_frame = points
        .iter()
        .filter(|p| !(SCORE_AXIS_MIN..=SCORE_AXIS_MAX).contains(&p.score))
        .count();

    ReportViewModel {
        score_card: ScoreCardViewModel {
            score: report.score,
            subject_name: report.subject_name.clone(),
        },
        explanation: report.explanation.clone(),
        contributions,
        history: HistoryChartViewModel {
            points,
            y_min: SCORE_AXIS_MIN,
            y_max: SCORE_AXIS_MAX,
            out_of_frame,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use credscore_runtime::MockScoreSource;
    use credscore_types::{FeatureContribution, HistoryPoint};

    fn ui(always_visible: bool) -> UiConfig {
        UiConfig {
            search_bar_always_visible: always_visible,
        }
    }

    fn report_body(vm: &ScreenViewModel) -> &ReportViewModel {
        match &vm.body {
            BodyViewModel::Report(report) => report,
            other => panic!("expected report body, got {:?}", other),
        }
    }

    #[test]
    fn test_loading_state() {
        let state = LoadState::Loading {
            query: "Alpha Corp".to_string(),
        };
        let vm = build_screen_view_model(&state, "Alpha Corp", "mock", &ui(true));

        assert!(matches!(vm.body, BodyViewModel::Loading { .. }));
        assert_eq!(vm.status_bar.state_label, "loading");
        assert_eq!(vm.status_bar.status_level, StatusLevel::Info);
        assert!(vm.show_search_bar);
    }

    #[test]
    fn test_search_bar_hidden_outside_loaded_when_configured() {
        let loading = LoadState::Loading {
            query: "x".to_string(),
        };
        let not_found = LoadState::NotFound {
            query: "x".to_string(),
        };
        let loaded = LoadState::Loaded(MockScoreSource::report_for("x"));

        assert!(!build_screen_view_model(&loading, "x", "mock", &ui(false)).show_search_bar);
        assert!(!build_screen_view_model(&not_found, "x", "mock", &ui(false)).show_search_bar);
        assert!(build_screen_view_model(&loaded, "x", "mock", &ui(false)).show_search_bar);
    }

    #[test]
    fn test_not_found_and_failed_messages() {
        let not_found = LoadState::NotFound {
            query: "Ghost".to_string(),
        };
        let vm = build_screen_view_model(&not_found, "Ghost", "fixtures", &ui(true));
        match vm.body {
            BodyViewModel::NotFound { message } => assert_eq!(message, "Company not found."),
            other => panic!("unexpected body {:?}", other),
        }

        let failed = LoadState::Failed {
            query: "Ghost".to_string(),
            message: "timeout".to_string(),
        };
        let vm = build_screen_view_model(&failed, "Ghost", "fixtures", &ui(true));
        assert_eq!(vm.status_bar.status_level, StatusLevel::Error);
        match vm.body {
            BodyViewModel::Failed { message } => {
                assert!(message.contains("Ghost"));
                assert!(message.contains("timeout"));
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_score_follows_report_not_name() {
        let mut report = MockScoreSource::report_for("Alpha Corp");
        let first = build_report_view_model(&report);

        report.subject_name = "Renamed Inc".to_string();
        let second = build_report_view_model(&report);

        assert_eq!(first.score_card.score, 750);
        assert_eq!(second.score_card.score, 750);
        assert_eq!(second.score_card.subject_name, "Renamed Inc");
    }

    #[test]
    fn test_contribution_order_and_styling() {
        let loaded = LoadState::Loaded(MockScoreSource::report_for("Alpha Corp"));
        let vm = build_screen_view_model(&loaded, "Alpha Corp", "mock", &ui(true));
        let report = report_body(&vm);

        let rows: Vec<(&str, &str, StatusLevel)> = report
            .contributions
            .iter()
            .map(|c| (c.feature.as_str(), c.direction.as_str(), c.level))
            .collect();

        assert_eq!(
            rows,
            [
                ("Revenue Growth", "Positive", StatusLevel::Success),
                ("Open-Source Contributions", "Strongly Positive", StatusLevel::Success),
                ("Legal Filings", "Negative", StatusLevel::Error),
                ("Debt-to-Equity Ratio", "Neutral", StatusLevel::Error),
            ]
        );
    }

    #[test]
    fn test_axis_is_fixed_and_outliers_counted() {
        let date = |m| NaiveDate::from_ymd_opt(2025, m, 1).unwrap();
        let mut report = MockScoreSource::report_for("Alpha Corp");
        report.history = vec![
            HistoryPoint::new(date(1), 580),
            HistoryPoint::new(date(2), 700),
            HistoryPoint::new(date(3), 900),
        ];
        report.feature_contributions = vec![FeatureContribution::new("x", "Positive")];

        let vm = build_report_view_model(&report);

        assert_eq!(vm.history.y_min, 600);
        assert_eq!(vm.history.y_max, 850);
        assert_eq!(vm.history.out_of_frame, 2);
        assert_eq!(vm.history.points[0].date, "2025-01-01");
    }

    #[test]
    fn test_axis_bounds_are_inclusive() {
        let date = |m| NaiveDate::from_ymd_opt(2025, m, 1).unwrap();
        let mut report = MockScoreSource::report_for("Alpha Corp");
        report.history = vec![
            HistoryPoint::new(date(1), 600),
            HistoryPoint::new(date(2), 850),
        ];

        assert_eq!(build_report_view_model(&report).history.out_of_frame, 0);
    }
}
