//! Substring matching of commit text against a match rule

use relnotes_core::CommitMatcherConfig;

/// Check whether `text` satisfies `rule`.
///
/// True when the text contains any `contains` entry, starts with any
/// `prefixes` entry or ends with any `suffixes` entry. Comparison is exact
/// and case-sensitive. An empty rule matches nothing; treating an empty
/// category rule as a catch-all is up to the caller.
pub fn matches(text: &str, rule: &CommitMatcherConfig) -> bool {
    rule.contains.iter().any(|s| text.contains(s.as_str()))
        || rule.prefixes.iter().any(|s| text.starts_with(s.as_str()))
        || rule.suffixes.iter().any(|s| text.ends_with(s.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rule_matches_nothing() {
        let rule = CommitMatcherConfig::new();
        assert!(!matches("anything", &rule));
        assert!(!matches("", &rule));
    }

    #[test]
    fn test_contains() {
        let rule = CommitMatcherConfig::new().contains("app/hello");
        assert!(matches("Commit 1\ncommit 1\napp/hello", &rule));
        assert!(!matches("Commit 5\ncommit 5", &rule));
    }

    #[test]
    fn test_prefix_only_checks_start() {
        let rule = CommitMatcherConfig::new().prefix("Merge pull request #");
        assert!(matches("Merge pull request #12 from x/y\nbody", &rule));
        assert!(!matches("Fix\nMerge pull request #12", &rule));
    }

    #[test]
    fn test_suffix_only_checks_end() {
        let rule = CommitMatcherConfig::new().suffix("[skip notes]");
        assert!(matches("Subject\nbody [skip notes]", &rule));
        assert!(!matches("Subject [skip notes]\nbody", &rule));
    }

    #[test]
    fn test_sets_are_ored() {
        let rule = CommitMatcherConfig::new()
            .contains("needle")
            .prefix("start")
            .suffix("end");
        assert!(matches("start here", &rule));
        assert!(matches("at the end", &rule));
        assert!(matches("a needle in", &rule));
        assert!(!matches("nothing relevant", &rule));
    }

    #[test]
    fn test_case_sensitive() {
        let rule = CommitMatcherConfig::new().contains("Breaking");
        assert!(!matches("breaking change", &rule));
    }
}
