//! Score sources
//!
//! A `ScoreSource` is the single query-by-name boundary where a real scoring
//! backend would attach. Everything above it (loader, dashboard state,
//! rendering) only sees `Result<Option<ScoreReport>>`.

mod fixture;
mod mock;

pub use fixture::FixtureScoreSource;
pub use mock::MockScoreSource;

use credscore_types::ScoreReport;

use crate::Result;

pub trait ScoreSource: Send + Sync {
    /// Fetch the report for `company`.
    ///
    /// `Ok(None)` means the source has no report for that name.
    fn fetch_score_report(&self, company: &str) -> Result<Option<ScoreReport>>;

    /// Short name used in logs and the status bar
    fn name(&self) -> &str;
}
