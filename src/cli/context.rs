//! Command execution context
//!
//! Resolves config, output format and template root once per command.

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::templates::FileTemplateStore;

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Output format after flag/env/config resolution
    pub format: OutputFormat,
    /// Directory templates are read from
    pub templates_root: PathBuf,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if an explicitly given config file is missing or invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let format = Self::resolve_format(opts.format, &config);
        let templates_root = config.templates_root(opts.templates_ref());

        Ok(Self {
            config,
            format,
            templates_root,
        })
    }

    fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
        if let Some(format) = flag {
            return format;
        }

        match config.preferences.format.as_deref() {
            Some(name) => OutputFormat::from_name(name).unwrap_or_else(|| {
                log::warn!("Unknown format {:?} in config, using pretty", name);
                OutputFormat::default()
            }),
            None => OutputFormat::default(),
        }
    }

    /// Template store rooted at the resolved template directory
    pub fn template_store(&self) -> FileTemplateStore {
        FileTemplateStore::new(&self.templates_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;

    fn config_with_format(format: Option<&str>) -> Config {
        Config {
            templates_dir: None,
            preferences: Preferences {
                format: format.map(String::from),
            },
        }
    }

    #[test]
    fn test_flag_beats_config() {
        let config = config_with_format(Some("json"));
        assert_eq!(
            CommandContext::resolve_format(Some(OutputFormat::Table), &config),
            OutputFormat::Table
        );
    }

    #[test]
    fn test_config_format_used_without_flag() {
        let config = config_with_format(Some("json"));
        assert_eq!(
            CommandContext::resolve_format(None, &config),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_unknown_config_format_falls_back() {
        let config = config_with_format(Some("xml"));
        assert_eq!(
            CommandContext::resolve_format(None, &config),
            OutputFormat::Pretty
        );
    }
}
