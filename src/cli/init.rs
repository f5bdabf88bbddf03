//! Init command - write an example configuration file

use anyhow::{Context, Result};
use console::style;
use specscore::config::{example_config, CONFIG_FILE_NAMES};
use std::path::Path;
use tracing::debug;

/// Run the init command
pub fn run(dir: &Path, force: bool) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        println!(
            "{} Already exists: {} (use --force to overwrite)",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, example_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    debug!("Wrote example config to {}", config_path.display());

    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    println!("\nNext steps:");
    println!("  {} Score a document", style("specscore openapi.yaml").cyan());
    println!(
        "  {} See how the score is computed",
        style("specscore openapi.yaml --explain-score").cyan()
    );

    Ok(())
}
