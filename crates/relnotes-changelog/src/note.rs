//! Release note text extraction

use relnotes_core::Commit;

/// Line opening an explicit release note block
pub const BLOCK_OPEN: &str = "```release-note";

/// Line closing a release note block
pub const BLOCK_CLOSE: &str = "```";

/// Note used when a commit has neither a block nor a subject
const NO_MESSAGE: &str = "(no message)";

/// Find the trimmed interior of the first ```release-note block in `body`.
///
/// Returns `None` when there is no opening line or the block is never closed.
pub fn find_release_note_block(body: &str) -> Option<String> {
    let mut lines = body.lines();
    lines.by_ref().find(|line| line.trim() == BLOCK_OPEN)?;

    let mut interior = Vec::new();
    for line in lines {
        if line.trim() == BLOCK_CLOSE {
            return Some(interior.join("\n").trim().to_string());
        }
        interior.push(line);
    }

    None
}

/// Extract the release note for a commit.
///
/// With `use_block` set, a non-empty release note block wins. Otherwise the
/// trimmed subject is used. The result is never empty.
pub fn extract_release_note(commit: &Commit, use_block: bool) -> String {
    if use_block {
        if let Some(note) = find_release_note_block(&commit.body).filter(|n| !n.is_empty()) {
            return note;
        }
    }

    let subject = commit.subject.trim();
    if subject.is_empty() {
        NO_MESSAGE.to_string()
    } else {
        subject.to_string()
    }
}
