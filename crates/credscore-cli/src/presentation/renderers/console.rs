use anyhow::Result;
use credscore_types::ScoreReport;
use std::io::Write;

use crate::presentation::presenters::build_report_view_model;
use crate::presentation::views::ReportView;

pub struct ConsoleRenderer {
    json_mode: bool,
    enable_color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, enable_color: bool) -> Self {
        Self {
            json_mode,
            enable_color,
        }
    }

    /// JSON mode prints the report in its wire shape; plain mode prints the
    /// same sections the dashboard shows.
    pub fn render_report(&self, report: &ScoreReport, out: &mut impl Write) -> Result<()> {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
            return Ok(());
        }

        let vm = build_report_view_model(report);
        write!(out, "{}", ReportView::new(&vm, self.enable_color))?;
        Ok(())
    }
}
