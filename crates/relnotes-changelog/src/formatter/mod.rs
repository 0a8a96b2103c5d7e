//! Release note formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use relnotes_core::ReleaseConfig;

use crate::types::ReleaseProposal;

/// Trait for release note formatters
pub trait ReleaseNoteFormatter: Send + Sync {
    /// Format a release proposal to string
    fn format(&self, proposal: &ReleaseProposal, config: &ReleaseConfig) -> String;
}

/// Render a release proposal with the default markdown formatter
pub fn render_release_note(proposal: &ReleaseProposal, config: &ReleaseConfig) -> String {
    MarkdownFormatter::new().format(proposal, config)
}
