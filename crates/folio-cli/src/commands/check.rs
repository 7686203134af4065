use std::path::Path;

use anyhow::{Context, Result};

use folio_core::Portfolio;

/// Load and validate a portfolio document, reporting what it contains.
pub fn run(file: &Path) -> Result<()> {
    let portfolio = Portfolio::load(file)
        .with_context(|| format!("validation failed for {}", file.display()))?;

    println!("{}: ok", file.display());
    println!("  title:     {}", portfolio.title);
    println!("  stats:     {}", portfolio.hero.stats.len());
    println!(
        "  code:      {}",
        if portfolio.hero.code_sample.is_empty() {
            "none".to_string()
        } else {
            format!("{} chars", portfolio.hero.code_sample.chars().count())
        }
    );
    println!("  skills:    {} categories", portfolio.skills.len());
    println!("  timeline:  {} entries", portfolio.timeline.len());
    println!("  projects:  {}", portfolio.projects.len());
    println!("  certs:     {}", portfolio.certs.len());
    println!("  links:     {}", portfolio.contact.links.len());
    Ok(())
}
