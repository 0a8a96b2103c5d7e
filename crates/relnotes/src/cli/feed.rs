//! Commit feed input

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use relnotes_core::Commit;

/// Read a JSON array of commits from `source`, or from stdin when it is `-`
pub fn read_commits(source: &Path) -> anyhow::Result<Vec<Commit>> {
    let raw = if source == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read commits from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read commits from {}", source.display()))?
    };

    let commits = parse_commits(&raw)?;
    debug!(count = commits.len(), "commit feed loaded");
    Ok(commits)
}

/// Parse a JSON array of commits; blank input is an empty feed
pub fn parse_commits(raw: &str) -> anyhow::Result<Vec<Commit>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).context("commit feed is not a valid JSON array of commits")
}
