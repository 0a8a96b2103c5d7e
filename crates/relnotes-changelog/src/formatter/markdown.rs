//! Markdown release note formatter

use relnotes_core::ReleaseConfig;
use tracing::{debug, instrument};

use super::ReleaseNoteFormatter;
use crate::types::{ReleaseCommit, ReleaseProposal};

/// Markdown release note formatter
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter {
    /// Repository URL for commit and compare links
    pub repo_url: Option<String>,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self { repo_url: None }
    }

    /// Set repository URL for links
    pub fn with_repo_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.repo_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    fn format_header(&self, output: &mut String, proposal: &ReleaseProposal) {
        if proposal.pre_tag.is_empty() {
            output.push_str(&format!("## Release {}\n", proposal.tag));
        } else {
            output.push_str(&format!(
                "## Release {} with changes since {}\n",
                proposal.tag, proposal.pre_tag
            ));
        }
    }

    fn format_entry(&self, output: &mut String, commit: &ReleaseCommit, config: &ReleaseConfig) {
        let options = &config.release_note_generator;

        // Continuation lines of a multi-line note stay inside the list item
        let note = commit.release_note.lines().collect::<Vec<_>>().join("\n  ");
        output.push_str(&format!("* {}", note));

        if options.show_abbrev_hash && !commit.commit.hash.is_empty() {
            let short_hash = commit.commit.short_hash();
            match &self.repo_url {
                Some(repo_url) => output.push_str(&format!(
                    " ([{}]({}/commit/{}))",
                    short_hash, repo_url, commit.commit.hash
                )),
                None => output.push_str(&format!(" ({})", short_hash)),
            }
        }

        if options.show_committer {
            let identity = if commit.commit.committer.is_empty() {
                &commit.commit.author
            } else {
                &commit.commit.committer
            };
            if !identity.is_empty() {
                output.push_str(&format!(" - by @{}", identity));
            }
        }

        output.push('\n');
    }
}

impl ReleaseNoteFormatter for MarkdownFormatter {
    #[instrument(skip(self, proposal, config), fields(tag = %proposal.tag, commit_count = proposal.commits.len()))]
    fn format(&self, proposal: &ReleaseProposal, config: &ReleaseConfig) -> String {
        let mut output = String::new();

        self.format_header(&mut output, proposal);

        let sections = proposal.sections(config);
        for section in &sections {
            output.push_str(&format!("\n### {}\n\n", section.title));
            for commit in &section.commits {
                self.format_entry(&mut output, commit, config);
            }
        }

        if let Some(repo_url) = &self.repo_url {
            if !proposal.pre_tag.is_empty() {
                output.push_str(&format!(
                    "\n**Full Changelog**: {}/compare/{}...{}\n",
                    repo_url, proposal.pre_tag, proposal.tag
                ));
            }
        }

        debug!(
            section_count = sections.len(),
            output_len = output.len(),
            "markdown release note formatted"
        );
        output
    }
}
