mod assets;
mod site;

use anyhow::{Context, Result};
use mdpress_config::Config;
use std::{env, path::PathBuf, process};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Keep the handle alive for the whole run so logs are flushed.
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?
        .start()
        .context("starting logger")?;

    // Optional site root argument; defaults to the current directory.
    let site_root = match env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => env::current_dir().context("resolving current directory")?,
    };

    let config = Config::load(&site_root)?
        .unwrap_or_default()
        .resolved(&site_root);

    assets::sync_static(&config.static_dir, &config.public_dir)?;
    site::build_site(&config)?;

    log::info!("site built at {}", config.public_dir.display());
    Ok(())
}
