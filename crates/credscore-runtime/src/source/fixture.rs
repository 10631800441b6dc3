use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use credscore_types::ScoreReport;

use super::ScoreSource;
use crate::{Error, Result};

/// Answers from a JSON file holding an array of reports.
///
/// Lookup is by trimmed, case-insensitive company name. Unknown names
/// resolve to `None`, which the dashboard shows as "not found". A source
/// built with [`FixtureScoreSource::load`] re-reads its file on every fetch,
/// so edits show up on the next search and a file that has gone missing or
/// broken fails the fetch.
#[derive(Debug, Clone)]
pub struct FixtureScoreSource {
    reports: HashMap<String, ScoreReport>,
    path: Option<PathBuf>,
    delay: Duration,
}

impl FixtureScoreSource {
    pub fn new(reports: Vec<ScoreReport>, delay: Duration) -> Self {
        Self {
            reports: index_reports(reports),
            path: None,
            delay,
        }
    }

    /// Read and validate `path` up front; later fetches read it again
    pub fn load(path: &Path, delay: Duration) -> Result<Self> {
        let reports = read_reports(path)?;
        tracing::debug!(
            path = %path.display(),
            count = reports.len(),
            "loaded score fixtures"
        );
        Ok(Self {
            reports: index_reports(reports),
            path: Some(path.to_path_buf()),
            delay,
        })
    }

    /// Number of reports as of construction
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl ScoreSource for FixtureScoreSource {
    fn fetch_score_report(&self, company: &str) -> Result<Option<ScoreReport>> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let key = normalize_name(company);
        let Some(path) = &self.path else {
            return Ok(self.reports.get(&key).cloned());
        };

        let reports = read_reports(path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "fixtures unreadable");
            Error::Source(e.to_string())
        })?;
        Ok(reports
            .into_iter()
            .find(|report| normalize_name(&report.subject_name) == key))
    }

    fn name(&self) -> &str {
        "fixtures"
    }
}

fn read_reports(path: &Path) -> Result<Vec<ScoreReport>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read fixtures file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(serde_json::from_str(&content)?)
}

fn index_reports(reports: Vec<ScoreReport>) -> HashMap<String, ScoreReport> {
    reports
        .into_iter()
        .map(|report| (normalize_name(&report.subject_name), report))
        .collect()
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockScoreSource;
    use std::fs;
    use tempfile::TempDir;

    fn write_fixtures(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("reports.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trimmed() {
        let source = FixtureScoreSource::new(
            vec![MockScoreSource::report_for("Alpha Corp")],
            Duration::ZERO,
        );

        let report = source.fetch_score_report("  alpha CORP ").unwrap();
        assert_eq!(report.unwrap().subject_name, "Alpha Corp");
    }

    #[test]
    fn test_unknown_name_is_none() {
        let source = FixtureScoreSource::new(
            vec![MockScoreSource::report_for("Alpha Corp")],
            Duration::ZERO,
        );

        assert!(source.fetch_score_report("Nope Inc").unwrap().is_none());
        assert!(source.fetch_score_report("").unwrap().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_fixtures(
            &dir,
            r#"[
                {"name": "Beta", "score": 640, "explanation": "x",
                 "featureContributions": [], "history": []},
                {"name": "Gamma", "score": 820, "explanation": "y"}
            ]"#,
        );

        let source = FixtureScoreSource::load(&path, Duration::ZERO).unwrap();
        assert_eq!(source.len(), 2);
        assert_eq!(
            source.fetch_score_report("gamma").unwrap().unwrap().score,
            820
        );
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = FixtureScoreSource::load(&dir.path().join("absent.json"), Duration::ZERO)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_fetch_sees_edits_to_the_file() {
        let dir = TempDir::new().unwrap();
        let path = write_fixtures(&dir, r#"[{"name": "Beta", "score": 640, "explanation": "x"}]"#);
        let source = FixtureScoreSource::load(&path, Duration::ZERO).unwrap();
        assert!(source.fetch_score_report("Delta").unwrap().is_none());

        write_fixtures(
            &dir,
            r#"[{"name": "Beta", "score": 655, "explanation": "x"},
                {"name": "Delta", "score": 700, "explanation": "z"}]"#,
        );

        assert_eq!(source.fetch_score_report("beta").unwrap().unwrap().score, 655);
        assert_eq!(source.fetch_score_report("delta").unwrap().unwrap().score, 700);
    }

    #[test]
    fn test_fetch_fails_once_file_is_gone() {
        let dir = TempDir::new().unwrap();
        let path = write_fixtures(&dir, r#"[{"name": "Beta", "score": 640, "explanation": "x"}]"#);
        let source = FixtureScoreSource::load(&path, Duration::ZERO).unwrap();

        fs::remove_file(&path).unwrap();

        let err = source.fetch_score_report("Beta").unwrap_err();
        assert!(matches!(err, Error::Source(_)));
        assert!(err.to_string().contains("reports.json"));
    }

    #[test]
    fn test_fetch_fails_on_broken_file() {
        let dir = TempDir::new().unwrap();
        let path = write_fixtures(&dir, r#"[{"name": "Beta", "score": 640, "explanation": "x"}]"#);
        let source = FixtureScoreSource::load(&path, Duration::ZERO).unwrap();

        write_fixtures(&dir, "[{");

        assert!(matches!(
            source.fetch_score_report("Beta").unwrap_err(),
            Error::Source(_)
        ));
    }

    #[test]
    fn test_load_malformed_file_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = write_fixtures(&dir, "{ not json");

        let err = FixtureScoreSource::load(&path, Duration::ZERO).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
