use std::path::Path;

use anyhow::{bail, Result};

use folio_core::AppConfig;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists.\nUse `folio init --force` to overwrite it.",
            path.display()
        );
    }

    AppConfig::default().save_to(path)?;
    tracing::info!(path = %path.display(), "Wrote default configuration");
    println!("Configuration written to {}", path.display());
    Ok(())
}
