//! Shared types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit as supplied by the commit feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit hash (full)
    #[serde(default)]
    pub hash: String,
    /// Subject line
    pub subject: String,
    /// Message body without the subject line
    #[serde(default)]
    pub body: String,
    /// Author name
    #[serde(default)]
    pub author: String,
    /// Committer name or handle
    #[serde(default)]
    pub committer: String,
    /// Commit timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Commit {
    /// Create a commit from its subject and body
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    /// Set the hash
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the committer
    pub fn with_committer(mut self, committer: impl Into<String>) -> Self {
        self.committer = committer.into();
        self
    }

    /// Set the timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// First 7 characters of the hash
    pub fn short_hash(&self) -> String {
        self.hash.chars().take(7).collect()
    }

    /// Subject and body joined by a newline; this is what match rules see
    pub fn full_text(&self) -> String {
        format!("{}\n{}", self.subject, self.body)
    }
}
