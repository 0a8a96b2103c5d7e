//! Release note types

use relnotes_core::{Commit, ReleaseConfig};
use serde::{Deserialize, Serialize};

/// Title of the section holding commits without a known category
pub const UNCATEGORIZED_TITLE: &str = "Uncategorized";

/// A commit selected for the release note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseCommit {
    /// The original commit
    #[serde(flatten)]
    pub commit: Commit,
    /// Id of the assigned category, empty when none matched
    #[serde(default)]
    pub category_id: String,
    /// Text rendered for this commit
    pub release_note: String,
}

impl ReleaseCommit {
    /// Create a release commit
    pub fn new(
        commit: Commit,
        category_id: impl Into<String>,
        release_note: impl Into<String>,
    ) -> Self {
        Self {
            commit,
            category_id: category_id.into(),
            release_note: release_note.into(),
        }
    }

    /// Check if the commit was assigned a category
    pub fn is_categorized(&self) -> bool {
        !self.category_id.is_empty()
    }
}

/// Everything needed to render the note for one release
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseProposal {
    /// Tag being released
    pub tag: String,
    /// Release name
    #[serde(default)]
    pub name: String,
    /// Previous tag the changes are compared against
    #[serde(default)]
    pub pre_tag: String,
    /// Whether this is a pre-release
    #[serde(default)]
    pub prerelease: bool,
    /// Commits in the release, in history order
    #[serde(default)]
    pub commits: Vec<ReleaseCommit>,
}

impl ReleaseProposal {
    /// Create a proposal for `tag` compared against `pre_tag`
    pub fn new(tag: impl Into<String>, pre_tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            pre_tag: pre_tag.into(),
            ..Default::default()
        }
    }

    /// Set the commits
    pub fn with_commits(mut self, commits: Vec<ReleaseCommit>) -> Self {
        self.commits = commits;
        self
    }

    /// Release name if set, otherwise the tag
    pub fn title(&self) -> &str {
        if self.name.is_empty() {
            &self.tag
        } else {
            &self.name
        }
    }

    /// Group the commits into sections.
    ///
    /// Sections follow the declaration order of `config.commit_categories`.
    /// Commits whose category is empty or not declared are collected in a
    /// trailing uncategorized section. Empty sections are dropped.
    pub fn sections(&self, config: &ReleaseConfig) -> Vec<Section> {
        let mut sections: Vec<Section> = config
            .commit_categories
            .iter()
            .map(|c| Section::new(&c.id, &c.title))
            .collect();
        let mut uncategorized = Section::new("", UNCATEGORIZED_TITLE);

        for commit in &self.commits {
            let target = sections
                .iter_mut()
                .find(|s| commit.is_categorized() && s.id == commit.category_id);
            match target {
                Some(section) => section.add_commit(commit.clone()),
                None => uncategorized.add_commit(commit.clone()),
            }
        }

        sections.push(uncategorized);
        sections.retain(|s| !s.is_empty());
        sections
    }
}

/// A titled group of release commits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Category id, empty for the uncategorized section
    pub id: String,
    /// Section title
    pub title: String,
    /// Commits in this section
    pub commits: Vec<ReleaseCommit>,
}

impl Section {
    /// Create a new section
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            commits: Vec::new(),
        }
    }

    /// Add a commit to the section
    pub fn add_commit(&mut self, commit: ReleaseCommit) {
        self.commits.push(commit);
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}
