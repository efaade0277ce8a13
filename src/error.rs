//! Error types for displaykit

use thiserror::Error;

/// Result type alias for displaykit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Template lookup and rendering errors
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid template name: {0:?}")]
    InvalidName(String),

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Failed to render template {name}: {reason}")]
    Render { name: String, reason: String },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_invalid_name() {
        let err = TemplateError::InvalidName("../secret".to_string());
        assert!(err.to_string().contains("../secret"));
    }

    #[test]
    fn test_template_error_not_found() {
        let err = TemplateError::NotFound("sidebar".to_string());
        assert_eq!(err.to_string(), "Template not found: sidebar");
    }

    #[test]
    fn test_template_error_render() {
        let err = TemplateError::Render {
            name: "footer".to_string(),
            reason: "stream did not contain valid UTF-8".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("footer"));
        assert!(msg.contains("UTF-8"));
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound("/tmp/missing.yaml".to_string());
        assert!(err.to_string().contains("/tmp/missing.yaml"));
    }

    #[test]
    fn test_config_error_parse() {
        let err = ConfigError::ParseError("unexpected key".to_string());
        assert!(err.to_string().contains("unexpected key"));
    }

    #[test]
    fn test_config_error_save() {
        let err = ConfigError::SaveError("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_error_from_template_error() {
        let err: Error = TemplateError::NotFound("header".to_string()).into();

        match err {
            Error::Template(TemplateError::NotFound(name)) => assert_eq!(name, "header"),
            _ => panic!("Expected Error::Template(TemplateError::NotFound)"),
        }
    }

    #[test]
    fn test_error_from_config_error() {
        let err: Error = ConfigError::Invalid("bad".to_string()).into();

        match err {
            Error::Config(ConfigError::Invalid(_)) => (),
            _ => panic!("Expected Error::Config(ConfigError::Invalid)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
