//! Shared fixtures for the cross-crate integration tests.

use git2::{Oid, Repository, Signature, Time};
use std::path::Path;
use tempfile::TempDir;

/// A throwaway repository with deterministic, strictly increasing commit times
pub struct GitFixture {
    dir: TempDir,
    repo: Repository,
    clock: i64,
}

impl GitFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Repository::init(dir.path()).expect("init repository");
        Self {
            dir,
            repo,
            clock: 1_700_000_000,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn commit(&mut self, message: &str) -> Oid {
        self.clock += 60;
        let sig = Signature::new("Release Bot", "bot@example.com", &Time::new(self.clock, 0))
            .expect("signature");
        let tree_id = self.repo.index().expect("index").write_tree().expect("write tree");
        let tree = self.repo.find_tree(tree_id).expect("find tree");
        let parent = self.repo.head().ok().and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("commit")
    }

    pub fn commit_all(&mut self, messages: &[&str]) {
        for message in messages {
            self.commit(message);
        }
    }

    pub fn tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("find object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("create tag");
    }
}

impl Default for GitFixture {
    fn default() -> Self {
        Self::new()
    }
}
