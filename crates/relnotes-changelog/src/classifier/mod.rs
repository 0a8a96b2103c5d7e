//! Commit classification

mod category;

pub use category::CategoryClassifier;

use relnotes_core::{Commit, ReleaseConfig};
use tracing::{debug, instrument};

use crate::types::ReleaseCommit;

/// Trait for commit classifiers
pub trait CommitClassifier: Send + Sync {
    /// Classify a commit, or return `None` if it is left out of the release
    fn classify(&self, commit: &Commit) -> Option<ReleaseCommit>;

    /// Classify every commit, keeping input order
    fn classify_all(&self, commits: &[Commit]) -> Vec<ReleaseCommit> {
        commits.iter().filter_map(|c| self.classify(c)).collect()
    }
}

/// Filter and categorize commits according to `config`
#[instrument(skip(commits, config), fields(commit_count = commits.len(), tag = %config.tag))]
pub fn build_release_commits(commits: &[Commit], config: &ReleaseConfig) -> Vec<ReleaseCommit> {
    let classifier = CategoryClassifier::new(config);
    let release_commits = classifier.classify_all(commits);
    debug!(
        kept = release_commits.len(),
        dropped = commits.len() - release_commits.len(),
        "commits classified"
    );
    release_commits
}
