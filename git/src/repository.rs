use crate::error::{GitError, Result, ResultExt};
use git2::{Oid, Repository as GitRepository, Sort};
use std::path::Path;
use tracing::debug;

/// Source of one-line commit subjects for release notes
pub trait CommitSource {
    fn open() -> Result<Self>
    where
        Self: Sized;
    /// Most recently committed tag, if the repository has any.
    fn latest_tag(&self) -> Result<Option<String>>;
    /// Subjects of commits reachable from HEAD but not from `rev`, newest first.
    fn subjects_since(&self, rev: &str) -> Result<Vec<String>>;
    fn subjects_since_last_tag(&self) -> Result<Vec<String>>;
}

pub struct RealGitRepository {
    repo: GitRepository,
}

impl RealGitRepository {
    /// Opens the repository containing `path`.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self> {
        let repo = GitRepository::discover(path.as_ref()).map_err(|e| {
            GitError::RepositoryError(format!("Failed to discover git repository: {e}"))
        })?;
        Ok(Self { repo })
    }

    fn latest_tagged_commit(&self) -> Result<Option<(String, Oid)>> {
        let names = self.repo.tag_names(None)?;
        let mut latest: Option<(String, Oid, i64)> = None;

        for name in names.iter().flatten() {
            let commit = match self
                .repo
                .revparse_single(&format!("refs/tags/{name}"))
                .and_then(|obj| obj.peel_to_commit())
            {
                Ok(commit) => commit,
                Err(e) => {
                    debug!(tag = name, error = %e, "skipping tag that does not point at a commit");
                    continue;
                }
            };

            let time = commit.time().seconds();
            if latest.as_ref().is_none_or(|(_, _, best)| time > *best) {
                latest = Some((name.to_string(), commit.id(), time));
            }
        }

        Ok(latest.map(|(name, oid, _)| (name, oid)))
    }

    fn collect_subjects(&self, stop_at: Option<Oid>) -> Result<Vec<String>> {
        let mut walk = self.repo.revwalk()?;
        walk.set_sorting(Sort::TIME)?;
        walk.push_head().context("Failed to read HEAD")?;
        if let Some(oid) = stop_at {
            walk.hide(oid)?;
        }

        let mut subjects = Vec::new();
        for oid in walk {
            let commit = self.repo.find_commit(oid?)?;
            let Some(summary) = commit.summary() else {
                continue;
            };
            if summary.starts_with("Merge ") {
                continue;
            }
            subjects.push(summary.to_string());
        }

        debug!(count = subjects.len(), "collected commit subjects");
        Ok(subjects)
    }
}

impl CommitSource for RealGitRepository {
    fn open() -> Result<Self> {
        Self::discover(".")
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        Ok(self.latest_tagged_commit()?.map(|(name, _)| name))
    }

    fn subjects_since(&self, rev: &str) -> Result<Vec<String>> {
        let commit = self
            .repo
            .revparse_single(rev)
            .and_then(|obj| obj.peel_to_commit())
            .map_err(|_| GitError::RevisionNotFound(rev.to_string()))?;

        self.collect_subjects(Some(commit.id()))
    }

    fn subjects_since_last_tag(&self) -> Result<Vec<String>> {
        let tagged = self.latest_tagged_commit()?;
        match &tagged {
            Some((name, _)) => debug!(tag = %name, "collecting commits since tag"),
            None => debug!("no tags found, collecting full history"),
        }
        self.collect_subjects(tagged.map(|(_, oid)| oid))
    }
}
