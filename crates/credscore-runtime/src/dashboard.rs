use std::sync::Arc;
use std::sync::mpsc::Receiver;

use credscore_types::ScoreReport;

use crate::{LoadCompleted, Loader, RequestId, ScoreSource};

/// What the dashboard currently shows
///
/// A loaded state always carries its report; there is no "loaded but
/// empty" combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading { query: String },
    Loaded(ScoreReport),
    NotFound { query: String },
    Failed { query: String, message: String },
}

impl LoadState {
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading { .. } => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::NotFound { .. } => "not found",
            LoadState::Failed { .. } => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    pub fn report(&self) -> Option<&ScoreReport> {
        match self {
            LoadState::Loaded(report) => Some(report),
            _ => None,
        }
    }
}

/// Dashboard state machine
///
/// Owns the active query and the current `LoadState`. Changing the active
/// query drops the current report and starts a new load; completions are
/// applied only when they answer the most recently issued request.
pub struct Dashboard {
    loader: Loader,
    active_query: String,
    latest_request: RequestId,
    state: LoadState,
}

impl Dashboard {
    /// Create the dashboard already loading `default_query`.
    pub fn start(
        source: Arc<dyn ScoreSource>,
        default_query: impl Into<String>,
    ) -> (Self, Receiver<LoadCompleted>) {
        let (mut loader, rx) = Loader::new(source);
        let active_query = default_query.into();
        let latest_request = loader.request(&active_query);

        let dashboard = Self {
            loader,
            state: LoadState::Loading {
                query: active_query.clone(),
            },
            active_query,
            latest_request,
        };
        (dashboard, rx)
    }

    pub fn active_query(&self) -> &str {
        &self.active_query
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn latest_request(&self) -> RequestId {
        self.latest_request
    }

    pub fn source_name(&self) -> &str {
        self.loader.source_name()
    }

    /// Commit `query` as the active query.
    ///
    /// Loading starts only when the value actually changes; committing the
    /// current query again is a no-op. Returns whether a load was started.
    pub fn search(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.active_query {
            tracing::debug!(query = %query, "search ignored, query unchanged");
            return false;
        }

        tracing::info!(query = %query, "search committed");
        self.active_query = query;
        self.begin_load();
        true
    }

    /// Load the active query again regardless of the current state.
    pub fn reload(&mut self) {
        tracing::info!(query = %self.active_query, "reload requested");
        self.begin_load();
    }

    fn begin_load(&mut self) {
        self.state = LoadState::Loading {
            query: self.active_query.clone(),
        };
        self.latest_request = self.loader.request(&self.active_query);
    }

    /// Apply a finished load. Returns false when the completion was
    /// superseded by a newer request and got discarded.
    pub fn apply(&mut self, completed: LoadCompleted) -> bool {
        let LoadCompleted {
            request_id,
            query,
            outcome,
        } = completed;

        if request_id != self.latest_request {
            tracing::debug!(
                request = %request_id,
                latest = %self.latest_request,
                query = %query,
                "stale load discarded"
            );
            return false;
        }

        self.state = match outcome {
            Ok(Some(report)) => {
                tracing::info!(request = %request_id, query = %query, score = report.score, "report loaded");
                LoadState::Loaded(report)
            }
            Ok(None) => {
                tracing::info!(request = %request_id, query = %query, "no report found");
                LoadState::NotFound { query }
            }
            Err(err) => {
                tracing::warn!(request = %request_id, query = %query, error = %err, "load failed");
                LoadState::Failed {
                    query,
                    message: err.to_string(),
                }
            }
        };
        true
    }
}
