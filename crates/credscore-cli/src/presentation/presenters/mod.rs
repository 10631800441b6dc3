pub mod dashboard;

pub use dashboard::{build_report_view_model, build_screen_view_model};
