//! Rule-based classifier driven by the release configuration

use relnotes_core::{Commit, CommitCategoryConfig, CommitMatcherConfig, ReleaseConfig};
use tracing::trace;

use super::CommitClassifier;
use crate::matcher::matches;
use crate::note::extract_release_note;
use crate::types::ReleaseCommit;

/// Classifier applying the include/exclude filters and ordered categories
/// of a [`ReleaseConfig`]
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    include: CommitMatcherConfig,
    exclude: CommitMatcherConfig,
    categories: Vec<CommitCategoryConfig>,
    use_release_note_block: bool,
}

impl CategoryClassifier {
    /// Create a classifier from a release configuration
    pub fn new(config: &ReleaseConfig) -> Self {
        Self {
            include: config.commit_include.clone(),
            exclude: config.commit_exclude.clone(),
            categories: config.commit_categories.clone(),
            use_release_note_block: config.release_note_generator.use_release_note_block,
        }
    }

    /// Check whether a commit's text passes the include and exclude filters
    pub fn is_selected(&self, text: &str) -> bool {
        if matches(text, &self.exclude) {
            return false;
        }
        // An empty include rule accepts everything
        self.include.is_empty() || matches(text, &self.include)
    }

    /// Id of the first category matching `text`, or an empty string.
    ///
    /// A category with an empty rule matches any text that reaches it.
    pub fn categorize(&self, text: &str) -> String {
        self.categories
            .iter()
            .find(|c| c.is_catch_all() || matches(text, &c.matcher))
            .map(|c| c.id.clone())
            .unwrap_or_default()
    }
}

impl CommitClassifier for CategoryClassifier {
    fn classify(&self, commit: &Commit) -> Option<ReleaseCommit> {
        let text = commit.full_text();

        if !self.is_selected(&text) {
            trace!(subject = %commit.subject, "commit filtered out");
            return None;
        }

        let category_id = self.categorize(&text);
        let release_note = extract_release_note(commit, self.use_release_note_block);
        trace!(subject = %commit.subject, category = %category_id, "commit classified");

        Some(ReleaseCommit::new(commit.clone(), category_id, release_note))
    }
}
