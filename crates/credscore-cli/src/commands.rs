use super::args::{Cli, Commands, SourceArgs};
use super::handlers;
use crate::logging::{self, LogTarget};
use anyhow::Result;
use credscore_runtime::{Config, LoaderConfig, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Dashboard {
        source: SourceArgs::default(),
        query: None,
    });

    // The dashboard owns the terminal, so it only logs when given a file
    let target = match (&command, cli.log_file) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Dashboard { .. }, None) => LogTarget::Disabled,
        (_, None) => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target)?;

    let config_path = resolve_config_path(cli.config.as_deref())?;

    match command {
        Commands::Init { force } => handlers::init::handle(&config_path, force),

        Commands::Report {
            company,
            source,
            format,
        } => {
            let config = Config::load_from(&config_path)?;
            let loader = apply_source_args(config.loader, source);
            handlers::report::handle(&loader, &company, format)
        }

        Commands::Dashboard { source, query } => {
            let config = Config::load_from(&config_path)?;
            let mut loader = apply_source_args(config.loader, source);
            if let Some(query) = query {
                loader.default_query = query;
            }
            let score_source = loader.build_source()?;
            handlers::dashboard::handle(score_source, loader.default_query, config.ui)
        }
    }
}

/// Command-line flags take precedence over the config file
fn apply_source_args(mut loader: LoaderConfig, args: SourceArgs) -> LoaderConfig {
    if let Some(delay_ms) = args.delay_ms {
        loader.delay_ms = delay_ms;
    }
    if let Some(fixtures) = args.fixtures {
        loader.fixtures = Some(fixtures);
    }
    loader
}
