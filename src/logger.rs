//! File logging setup.
//!
//! The terminal belongs to the TUI while the app runs, so log output
//! goes to a file only, never stdout.

use anyhow::{Context, Result};

use crate::config::Config;

/// Installs the global logger according to the logging section of the
/// config. With logging disabled nothing is installed and the `log`
/// macros are no-ops.
pub fn init(config: &Config) -> Result<()> {
    if !config.logging.enabled {
        return Ok(());
    }

    let path = config.log_file()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.level_filter())
        .chain(
            fern::log_file(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?,
        )
        .apply()
        .context("Failed to install logger")?;

    log::info!("logging initialized at {}", path.display());
    Ok(())
}
