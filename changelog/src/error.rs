use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a changelog classifier
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read configuration file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Invalid rule #{index}: {reason}")]
    InvalidRule { index: usize, reason: String },

    #[error("Unknown render style: {0}")]
    UnknownStyle(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError { path, source } => {
                format!("Could not read {}: {source}", path.display())
            }
            Self::ConfigError(e) => format!("Configuration is not valid TOML: {e}"),
            Self::InvalidRule { index, reason } => {
                format!("Rule #{index} in the category table is invalid: {reason}")
            }
            Self::UnknownStyle(style) => {
                format!("Unknown render style '{style}' (expected 'plain' or 'decorated')")
            }
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;
