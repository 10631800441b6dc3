//! Request-tagged loading
//!
//! Every load gets a monotonically increasing `RequestId` and runs on its
//! own worker thread. The result comes back as a `LoadCompleted` message;
//! deciding whether it is still current is the receiver's job.

use std::fmt;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use credscore_types::ScoreReport;

use crate::{Result, ScoreSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of one load, posted back by the worker thread
#[derive(Debug)]
pub struct LoadCompleted {
    pub request_id: RequestId,
    pub query: String,
    pub outcome: Result<Option<ScoreReport>>,
}

pub struct Loader {
    source: Arc<dyn ScoreSource>,
    next_id: u64,
    tx: Sender<LoadCompleted>,
}

impl Loader {
    pub fn new(source: Arc<dyn ScoreSource>) -> (Self, Receiver<LoadCompleted>) {
        let (tx, rx) = mpsc::channel();
        let loader = Self {
            source,
            next_id: 0,
            tx,
        };
        (loader, rx)
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Start loading `query` in the background.
    ///
    /// Returns immediately; the outcome arrives on the receiver returned by
    /// `Loader::new`. Earlier in-flight loads are not cancelled.
    pub fn request(&mut self, query: &str) -> RequestId {
        self.next_id += 1;
        let request_id = RequestId(self.next_id);

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let query = query.to_string();

        tracing::debug!(request = %request_id, query = %query, source = source.name(), "load issued");

        thread::spawn(move || {
            let outcome = source.fetch_score_report(&query);
            // Receiver gone means the dashboard shut down; nothing to do
            let _ = tx.send(LoadCompleted {
                request_id,
                query,
                outcome,
            });
        });

        request_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockScoreSource;
    use std::time::Duration;

    #[test]
    fn test_request_ids_increase() {
        let (mut loader, _rx) = Loader::new(Arc::new(MockScoreSource::new(Duration::ZERO)));

        let first = loader.request("A");
        let second = loader.request("B");
        let third = loader.request("A");

        assert!(first < second);
        assert!(second < third);
        assert_eq!(first.value(), 1);
    }

    #[test]
    fn test_completion_carries_id_and_query() {
        let (mut loader, rx) = Loader::new(Arc::new(MockScoreSource::new(Duration::ZERO)));

        let id = loader.request("Alpha Corp");
        let completed = rx.recv_timeout(Duration::from_secs(5)).unwrap();

        assert_eq!(completed.request_id, id);
        assert_eq!(completed.query, "Alpha Corp");
        let report = completed.outcome.unwrap().unwrap();
        assert_eq!(report.subject_name, "Alpha Corp");
    }
}
