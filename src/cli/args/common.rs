//! Common CLI types shared across commands

use crate::models::Position;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting (global default)
    #[default]
    Pretty,
    /// Table format - one row per display object
    Table,
    /// JSON format - structured for scripts and client payloads
    Json,
}

impl OutputFormat {
    /// Parse a format name from config, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(name, true).ok()
    }

    /// Name as written in the config file
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

/// Card placement flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CardPosition {
    /// Above existing cards
    Top,
    /// Below existing cards
    Bottom,
}

impl From<CardPosition> for Position {
    fn from(position: CardPosition) -> Self {
        match position {
            CardPosition::Top => Position::Top,
            CardPosition::Bottom => Position::Bottom,
        }
    }
}
