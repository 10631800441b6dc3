pub mod report;
pub mod tui;

pub use report::ReportView;
