use chrono::NaiveDate;
use credscore_types::*;

const WIRE_REPORT: &str = r#"{
  "name": "Beta Holdings",
  "score": 688,
  "explanation": "Thin filing history.",
  "featureContributions": [
    { "feature": "Revenue Growth", "contribution": "Positive" },
    { "feature": "Legal Filings", "contribution": "Strongly Negative" },
    { "feature": "Board Turnover", "contribution": "Slightly Negative" }
  ],
  "history": [
    { "date": "2025-01-01", "score": 701 },
    { "date": "2025-02-01", "score": 688 }
  ]
}"#;

#[test]
fn test_deserialize_wire_shape() {
    let report: ScoreReport = serde_json::from_str(WIRE_REPORT).unwrap();

    assert_eq!(report.subject_name, "Beta Holdings");
    assert_eq!(report.score, 688);
    assert_eq!(report.feature_contributions.len(), 3);
    assert_eq!(
        report.feature_contributions[1].contribution,
        Direction::StronglyNegative
    );
    assert_eq!(
        report.feature_contributions[2].contribution,
        Direction::Other("Slightly Negative".to_string())
    );
    assert_eq!(
        report.latest().unwrap().date,
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    );
}

#[test]
fn test_serialize_uses_wire_names() {
    let report: ScoreReport = serde_json::from_str(WIRE_REPORT).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["name"], "Beta Holdings");
    assert!(value.get("subject_name").is_none());
    assert_eq!(value["featureContributions"][2]["contribution"], "Slightly Negative");
    assert_eq!(value["history"][0]["date"], "2025-01-01");
}

#[test]
fn test_missing_collections_default_to_empty() {
    let report: ScoreReport =
        serde_json::from_str(r#"{"name": "Gamma", "score": 610, "explanation": ""}"#).unwrap();

    assert!(report.feature_contributions.is_empty());
    assert!(report.history.is_empty());
    assert!(report.latest().is_none());
}

#[test]
fn test_contribution_order_is_preserved() {
    let report: ScoreReport = serde_json::from_str(WIRE_REPORT).unwrap();
    let features: Vec<&str> = report
        .feature_contributions
        .iter()
        .map(|c| c.feature.as_str())
        .collect();

    assert_eq!(features, ["Revenue Growth", "Legal Filings", "Board Turnover"]);
}
