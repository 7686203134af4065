use std::path::Path;

use anyhow::{bail, Context, Result};

use folio_core::{AppConfig, Portfolio};

/// Write a starter portfolio document and, if absent, the default config.
pub fn run(config: &AppConfig, dir: &Path, force: bool) -> Result<()> {
    let portfolio_path = dir.join("portfolio.toml");
    if portfolio_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            portfolio_path.display()
        );
    }

    let sample = Portfolio::sample();
    let content = toml::to_string_pretty(&sample).context("failed to serialize sample document")?;
    std::fs::create_dir_all(dir)?;
    std::fs::write(&portfolio_path, content)?;
    println!("Wrote {}", portfolio_path.display());

    let config_path = AppConfig::config_path();
    if !config_path.exists() {
        config.save().context("failed to write default config")?;
        println!("Wrote {}", config_path.display());
    }

    println!("Run `folio -p {}` to view it.", portfolio_path.display());
    Ok(())
}
