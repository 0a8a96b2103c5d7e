//! Relnotes Changelog - Commit classification and release note rendering
//!
//! Commits are filtered and sorted into the categories declared in a
//! [`ReleaseConfig`](relnotes_core::ReleaseConfig), then rendered as a
//! markdown release note grouped by category.

pub mod classifier;
pub mod formatter;
pub mod generator;
pub mod matcher;
pub mod note;
pub mod types;

pub use classifier::{build_release_commits, CategoryClassifier, CommitClassifier};
pub use formatter::{render_release_note, MarkdownFormatter, ReleaseNoteFormatter};
pub use generator::ReleaseNoteGenerator;
pub use matcher::matches;
pub use types::{ReleaseCommit, ReleaseProposal, Section};
