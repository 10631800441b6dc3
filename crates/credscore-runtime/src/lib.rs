pub mod config;
pub mod dashboard;
pub mod error;
pub mod loader;
pub mod source;

pub use config::{Config, LoaderConfig, UiConfig, resolve_config_path};
pub use dashboard::{Dashboard, LoadState};
pub use error::{Error, Result};
pub use loader::{LoadCompleted, Loader, RequestId};
pub use source::{FixtureScoreSource, MockScoreSource, ScoreSource};
