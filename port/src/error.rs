use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortError {
    #[error("Invalid release version: {0}")]
    InvalidVersion(#[from] semver::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize manifest: {0}")]
    ManifestError(#[from] serde_json::Error),

    #[error("vcpkg did not report an actual hash")]
    HashNotFound,

    #[error("{0}: {1}")]
    WithContext(String, Box<PortError>),
}

impl PortError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        PortError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            PortError::InvalidVersion(e) => format!("Invalid version format: {e}"),
            PortError::WriteError { path, source } => {
                format!("Could not write {}: {source}", path.display())
            }
            PortError::HashNotFound => {
                "The probe build finished without printing 'Actual hash'; check the vcpkg output"
                    .to_string()
            }
            PortError::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortError>;
