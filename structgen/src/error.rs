use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating cluster call wrappers
#[derive(Error, Debug)]
pub enum StructGenError {
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid source pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("No .cpp files found in {0}")]
    NoSources(PathBuf),

    #[error("{0}: {1}")]
    WithContext(String, Box<StructGenError>),
}

impl StructGenError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError { path, source } => {
                format!("Could not read {}: {source}", path.display())
            }
            Self::WriteError { path, source } => {
                format!("Could not write {}: {source}", path.display())
            }
            Self::NoSources(dir) => format!(
                "No cluster sources (*.cpp) in {}; pass --sources to point at them",
                dir.display()
            ),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StructGenError>;
