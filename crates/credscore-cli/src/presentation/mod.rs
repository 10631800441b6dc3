//! # Presentation Layer
//!
//! Data flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(TUI)==> [ View widgets ]
//!  (owns state)    (pure fn)          (raw data)       (owns UI state) ==(console)==> text / JSON
//! ```
//!
//! - ViewModels carry raw data (numbers, dates, labels). Color decisions are
//!   made once, as a `StatusLevel`, by the presenter.
//! - Views take a reference to a ViewModel and only do layout and styling.
//! - The renderer owns UI-only state: the search field's edit buffer. The
//!   active query and the loaded report belong to the handler.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;
