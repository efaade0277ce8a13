//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod config;
pub mod context;
pub mod display;
pub mod include;
pub mod status;

pub use args::{CardPosition, GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// displaykit - build display-update payloads and include HTML templates
#[derive(Parser, Debug)]
#[command(name = "displaykit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "DISPLAYKIT_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "DISPLAYKIT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override template directory
    #[arg(long, global = true, env = "DISPLAYKIT_TEMPLATES", hide_env = true)]
    pub templates: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "DISPLAYKIT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Success alert that clears previous alerts
    Success {
        /// Text or HTML to display
        content: String,
    },

    /// Error alert that clears previous alerts
    Error {
        /// Text or HTML to display
        content: String,
    },

    /// Warning alert that clears previous alerts
    Warning {
        /// Text or HTML to display
        content: String,
    },

    /// Information alert that clears previous alerts
    Info {
        /// Text or HTML to display
        content: String,
    },

    /// Card display object
    Card(CardArgs),

    /// Display object of any type
    Show {
        /// Display type, e.g. alert-success or card (not validated)
        #[arg(long = "type", short = 't')]
        kind: String,

        /// Text or HTML to display
        content: String,

        /// Clear alerts, cards, or both before rendering
        #[arg(long)]
        reset: Option<String>,
    },

    /// Print the content of an HTML template
    Include {
        /// Template name; `.html` is assumed when no extension is given
        filename: String,
    },

    /// Update the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show configuration and template directory status
    Status,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   displaykit completion bash > /etc/bash_completion.d/displaykit
  zsh:    displaykit completion zsh > \"${fpath[1]}/_displaykit\"
  fish:   displaykit completion fish > ~/.config/fish/completions/displaykit.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config file subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set the default template directory
    SetTemplates {
        /// Directory holding HTML templates
        dir: String,
    },

    /// Set the default output format
    SetFormat {
        /// Output format (pretty, table, json)
        #[arg(value_enum)]
        format: OutputFormat,
    },
}

/// Card options
#[derive(Debug, Clone, Args)]
pub struct CardArgs {
    /// Text or HTML to display
    pub content: String,

    /// Card id
    #[arg(long)]
    pub id: Option<String>,

    /// Insert above or below existing cards (client default: bottom)
    #[arg(long, value_enum)]
    pub position: Option<CardPosition>,

    /// Clear alerts, cards, or both before rendering
    #[arg(long)]
    pub reset: Option<String>,
}
