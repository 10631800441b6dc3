use anyhow::{Result, bail};
use credscore_runtime::LoaderConfig;
use is_terminal::IsTerminal;

use crate::presentation::renderers::ConsoleRenderer;
use crate::types::OutputFormat;

pub fn handle(loader: &LoaderConfig, company: &str, format: OutputFormat) -> Result<()> {
    let source = loader.build_source()?;
    tracing::debug!(company = %company, source = source.name(), "fetching report");

    let Some(report) = source.fetch_score_report(company)? else {
        bail!("Company not found: {}", company);
    };

    let stdout = std::io::stdout();
    let enable_color = stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let renderer = ConsoleRenderer::new(format == OutputFormat::Json, enable_color);
    renderer.render_report(&report, &mut stdout.lock())
}
