//! Config file commands

use std::path::PathBuf;

use colored::Colorize;
use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Set the default template directory
pub fn set_templates(opts: &GlobalOptions, dir: &str) -> Result<()> {
    let mut config = load_for_update(opts)?;
    config.templates_dir = Some(PathBuf::from(dir));
    config.save_at(opts.config_ref())?;

    println!("{} Template directory set to {}", "✓".green(), dir.cyan());
    Ok(())
}

/// Set the default output format
pub fn set_format(opts: &GlobalOptions, format: OutputFormat) -> Result<()> {
    let mut config = load_for_update(opts)?;
    config.preferences.format = Some(format.name().to_string());
    config.save_at(opts.config_ref())?;

    println!("{} Output format set to {}", "✓".green(), format.name().cyan());
    Ok(())
}

/// Existing config, or defaults when the file does not exist yet
fn load_for_update(opts: &GlobalOptions) -> Result<Config> {
    let path = Config::resolve_path(opts.config_ref())?;
    if path.exists() {
        Config::load_from(&path)
    } else {
        debug!("Creating new config at {}", path.display());
        Ok(Config::default())
    }
}
