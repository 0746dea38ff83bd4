use thiserror::Error;

/// Git operation error type that provides detailed context about the error
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Git2 error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("Revision not found: {0}")]
    RevisionNotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<GitError>),
}

impl GitError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        GitError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            GitError::Git2Error(e) => {
                let msg = e.to_string();
                // Extract just the message without the class and code details
                msg.split(';').next().map_or_else(
                    || format!("Git error: {msg}"),
                    |main_msg| format!("Git error: {}", main_msg.trim()),
                )
            }
            GitError::RevisionNotFound(rev) => {
                format!("Revision '{rev}' does not exist in this repository")
            }
            GitError::RepositoryError(msg) => format!("Repository error: {msg}"),
            GitError::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GitError>;

/// Helper trait for adding context to results
pub trait ResultExt<T> {
    /// Add context directly from a string
    fn context<C: Into<String>>(self, context: C) -> std::result::Result<T, GitError>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<GitError>,
{
    fn context<C: Into<String>>(self, context: C) -> std::result::Result<T, GitError> {
        self.map_err(|err| {
            let git_err: GitError = err.into();
            git_err.with_context(context)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_prefixed_to_user_message() {
        let result: std::result::Result<(), GitError> =
            Err(GitError::RevisionNotFound("v9.9.9".to_string()));
        let err = result.context("Collecting commit subjects").unwrap_err();

        assert_eq!(
            err.user_message(),
            "Collecting commit subjects: Revision 'v9.9.9' does not exist in this repository"
        );
    }
}
