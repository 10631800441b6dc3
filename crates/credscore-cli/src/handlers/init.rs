use anyhow::{Result, bail};
use credscore_runtime::Config;
use std::path::Path;

pub fn handle(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default config");
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}
