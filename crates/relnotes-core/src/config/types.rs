//! Configuration types

use serde::{Deserialize, Deserializer, Serialize};

/// Release configuration, usually read from a `RELEASE` file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReleaseConfig {
    /// Tag of the release being prepared (required)
    #[serde(deserialize_with = "null_as_empty")]
    pub tag: String,

    /// Human-readable release name
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,

    /// Whether the release is a pre-release
    pub prerelease: bool,

    /// Commits must match this rule to be included (empty = all)
    pub commit_include: CommitMatcherConfig,

    /// Commits matching this rule are dropped
    pub commit_exclude: CommitMatcherConfig,

    /// Ordered categories; the first matching one wins
    pub commit_categories: Vec<CommitCategoryConfig>,

    /// Release note rendering options
    pub release_note_generator: ReleaseNoteGeneratorConfig,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            tag: String::new(),
            name: String::new(),
            prerelease: false,
            commit_include: CommitMatcherConfig::default(),
            commit_exclude: CommitMatcherConfig::default(),
            commit_categories: Vec::new(),
            release_note_generator: ReleaseNoteGeneratorConfig::default(),
        }
    }
}

impl ReleaseConfig {
    /// Create a config for the given tag with every other field defaulted
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Find a category by id
    pub fn category(&self, id: &str) -> Option<&CommitCategoryConfig> {
        self.commit_categories.iter().find(|c| c.id == id)
    }

    /// The category with an empty rule, if any
    pub fn catch_all(&self) -> Option<&CommitCategoryConfig> {
        self.commit_categories.iter().find(|c| c.is_catch_all())
    }

    /// Whether any categories are configured
    pub fn has_categories(&self) -> bool {
        !self.commit_categories.is_empty()
    }
}

/// A YAML null (`~`, `null`) reads as an unset string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Substring rule used for include/exclude filters and categories.
///
/// A rule matches when any `contains` entry occurs in the text, or the text
/// starts with any `prefixes` entry, or ends with any `suffixes` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitMatcherConfig {
    /// Substrings searched anywhere in the commit text
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contains: Vec<String>,

    /// Prefixes of the commit text
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<String>,

    /// Suffixes of the commit text
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suffixes: Vec<String>,
}

impl CommitMatcherConfig {
    /// Create an empty rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a substring
    pub fn contains(mut self, value: impl Into<String>) -> Self {
        self.contains.push(value.into());
        self
    }

    /// Add a prefix
    pub fn prefix(mut self, value: impl Into<String>) -> Self {
        self.prefixes.push(value.into());
        self
    }

    /// Add a suffix
    pub fn suffix(mut self, value: impl Into<String>) -> Self {
        self.suffixes.push(value.into());
        self
    }

    /// Check if the rule has no patterns at all
    pub fn is_empty(&self) -> bool {
        self.contains.is_empty() && self.prefixes.is_empty() && self.suffixes.is_empty()
    }
}

/// A release note category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommitCategoryConfig {
    /// Category id; synthesized as `_category_<index>` when omitted
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,

    /// Section title used when rendering
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    /// Match rule, written at the same level as `id` and `title`
    #[serde(flatten)]
    pub matcher: CommitMatcherConfig,
}

impl CommitCategoryConfig {
    /// Create a catch-all category
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            matcher: CommitMatcherConfig::default(),
        }
    }

    /// Set the match rule
    pub fn with_matcher(mut self, matcher: CommitMatcherConfig) -> Self {
        self.matcher = matcher;
        self
    }

    /// A category with an empty rule collects otherwise unmatched commits
    pub fn is_catch_all(&self) -> bool {
        self.matcher.is_empty()
    }
}

/// Release note generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReleaseNoteGeneratorConfig {
    /// Append the committer to each entry
    pub show_committer: bool,

    /// Prefer a ```release-note block in the commit body over the subject
    pub use_release_note_block: bool,

    /// Append the abbreviated commit hash to each entry
    pub show_abbrev_hash: bool,
}

impl Default for ReleaseNoteGeneratorConfig {
    fn default() -> Self {
        Self {
            show_committer: false,
            use_release_note_block: false,
            show_abbrev_hash: false,
        }
    }
}
