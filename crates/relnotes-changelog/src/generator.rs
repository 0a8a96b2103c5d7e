//! Release note generation

use relnotes_core::{Commit, ReleaseConfig};
use tracing::{debug, info, instrument};

use crate::classifier::{CategoryClassifier, CommitClassifier};
use crate::formatter::{MarkdownFormatter, ReleaseNoteFormatter};
use crate::types::{ReleaseCommit, ReleaseProposal};

/// Release note generator
pub struct ReleaseNoteGenerator {
    classifier: Box<dyn CommitClassifier>,
    formatter: Box<dyn ReleaseNoteFormatter>,
    config: ReleaseConfig,
}

impl ReleaseNoteGenerator {
    /// Create a new generator with the config-driven classifier and the
    /// markdown formatter
    pub fn new(config: ReleaseConfig) -> Self {
        Self {
            classifier: Box::new(CategoryClassifier::new(&config)),
            formatter: Box::new(MarkdownFormatter::new()),
            config,
        }
    }

    /// Use a custom classifier
    pub fn with_classifier<C: CommitClassifier + 'static>(mut self, classifier: C) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ReleaseNoteFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// The release configuration
    pub fn config(&self) -> &ReleaseConfig {
        &self.config
    }

    /// Filter and categorize commits
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn build_commits(&self, commits: &[Commit]) -> Vec<ReleaseCommit> {
        let release_commits = self.classifier.classify_all(commits);
        debug!(kept = release_commits.len(), "release commits built");
        release_commits
    }

    /// Build a release proposal for the configured tag
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn propose(&self, pre_tag: &str, commits: &[Commit]) -> ReleaseProposal {
        info!(
            tag = %self.config.tag,
            pre_tag,
            commit_count = commits.len(),
            "building release proposal"
        );

        ReleaseProposal {
            tag: self.config.tag.clone(),
            name: self.config.name.clone(),
            pre_tag: pre_tag.to_string(),
            prerelease: self.config.prerelease,
            commits: self.build_commits(commits),
        }
    }

    /// Format a proposal to string
    pub fn format(&self, proposal: &ReleaseProposal) -> String {
        self.formatter.format(proposal, &self.config)
    }

    /// Propose and format in one step
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate_formatted(&self, pre_tag: &str, commits: &[Commit]) -> String {
        let proposal = self.propose(pre_tag, commits);
        let output = self.format(&proposal);
        debug!(output_len = output.len(), "release note formatted");
        output
    }
}
