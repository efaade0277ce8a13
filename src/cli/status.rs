//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "displaykit Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else if opts.config_ref().is_some() {
        println!("{} Configuration not found: {}", "✗".red(), config_path.display());
        println!();
        return Ok(());
    } else {
        println!(
            "{} No config file at {} (using defaults)",
            "○".dimmed(),
            config_path.display()
        );
    }

    let ctx = CommandContext::new(opts)?;
    println!("Output format: {:?}", ctx.format);
    println!();

    let store = ctx.template_store();
    let root = store.root().display().to_string();
    if store.root().is_dir() {
        let names = store.list()?;
        println!("{} Template directory: {}", "✓".green(), root.cyan());
        if names.is_empty() {
            println!("  {} No .html templates found", "○".dimmed());
        } else {
            println!("  {} template(s): {}", names.len(), names.join(", "));
        }
    } else {
        println!("{} Template directory not found: {}", "✗".red(), root);
        println!("  → Set templates_dir in the config file or pass --templates");
    }

    println!();
    Ok(())
}
