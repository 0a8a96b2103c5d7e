//! Configuration parsing and loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::{config_file_names, synthesized_category_id};
use super::types::ReleaseConfig;
use super::validation::validate_config;

/// Parse and validate a YAML release configuration.
///
/// Categories declared without an `id` are given `_category_<index>`.
/// A blank document parses as the default config and therefore fails
/// validation on the missing tag.
pub fn parse_release_config(raw: &[u8]) -> Result<ReleaseConfig> {
    let config = if raw.iter().all(u8::is_ascii_whitespace) {
        ReleaseConfig::default()
    } else {
        serde_yaml::from_slice(raw).map_err(ConfigError::YamlError)?
    };

    finalize(config)
}

/// Parse and validate a TOML release configuration
pub fn parse_release_config_toml(raw: &str) -> Result<ReleaseConfig> {
    let config: ReleaseConfig = toml::from_str(raw).map_err(ConfigError::TomlError)?;
    finalize(config)
}

fn finalize(mut config: ReleaseConfig) -> Result<ReleaseConfig> {
    assign_category_ids(&mut config);
    validate_config(&config)?;
    debug!(
        tag = %config.tag,
        categories = config.commit_categories.len(),
        "release config parsed"
    );
    Ok(config)
}

fn assign_category_ids(config: &mut ReleaseConfig) {
    for (i, category) in config.commit_categories.iter_mut().enumerate() {
        if category.id.is_empty() {
            category.id = synthesized_category_id(i);
        }
    }
}

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<ReleaseConfig> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config = if format == "TOML" {
        parse_release_config_toml(&content)?
    } else {
        parse_release_config(content.as_bytes())?
    };

    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// At each directory level the search checks `<dir>/<name>` and then
/// `<dir>/.github/<name>`. The first match wins.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.is_file() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.is_file() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration from directory (searching parent directories)
pub fn load_config_from_dir(dir: &Path) -> Result<(ReleaseConfig, PathBuf)> {
    let config_path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;

    let config = load_config(&config_path)?;
    Ok((config, config_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        CommitCategoryConfig, CommitMatcherConfig, ReleaseNoteGeneratorConfig,
        DEFAULT_CONFIG_TEMPLATE,
    };
    use crate::error::RelnotesError;
    use tempfile::TempDir;

    const VALID_CONFIG: &str = r#"
tag: v1.1.0
name: hello

commit-include:
  contains:
    - app/hello

commit-exclude:
  prefixes:
    - "Merge pull request #"

commit-categories:
  - title: Breaking Changes
    contains:
      - change-category/breaking-change
  - title: New Features
    contains:
      - change-category/new-feature
  - title: Notable Changes
    contains:
      - change-category/notable-change
  - title: Internal Changes

release-note-generator:
  show-committer: true
  use-release-note-block: true
"#;

    fn labelled(id: &str, title: &str, label: &str) -> CommitCategoryConfig {
        CommitCategoryConfig::new(id, title)
            .with_matcher(CommitMatcherConfig::new().contains(label))
    }

    #[test]
    fn test_parse_empty_config() {
        let err = parse_release_config(b"").unwrap_err();
        assert_eq!(err.to_string(), "tag must be specified");
    }

    #[test]
    fn test_parse_config_without_tag() {
        let raw = b"name: hello\ncommit-categories:\n  - title: Everything\n";
        let err = parse_release_config(raw).unwrap_err();
        assert!(matches!(
            err,
            RelnotesError::Config(ConfigError::MissingField(ref f)) if f == "tag"
        ));
    }

    #[test]
    fn test_parse_valid_config() {
        let config = parse_release_config(VALID_CONFIG.as_bytes()).unwrap();

        let expected = ReleaseConfig {
            tag: "v1.1.0".to_string(),
            name: "hello".to_string(),
            prerelease: false,
            commit_include: CommitMatcherConfig::new().contains("app/hello"),
            commit_exclude: CommitMatcherConfig::new().prefix("Merge pull request #"),
            commit_categories: vec![
                labelled("_category_0", "Breaking Changes", "change-category/breaking-change"),
                labelled("_category_1", "New Features", "change-category/new-feature"),
                labelled("_category_2", "Notable Changes", "change-category/notable-change"),
                CommitCategoryConfig::new("_category_3", "Internal Changes"),
            ],
            release_note_generator: ReleaseNoteGeneratorConfig {
                show_committer: true,
                use_release_note_block: true,
                show_abbrev_hash: false,
            },
        };

        assert_eq!(config, expected);
    }

    #[test]
    fn test_explicit_ids_are_preserved() {
        let raw = br#"
tag: v1.0.0
commit-categories:
  - title: First
    contains: [a]
  - id: custom
    title: Second
    contains: [b]
  - title: Third
"#;
        let config = parse_release_config(raw).unwrap();
        let ids: Vec<_> = config
            .commit_categories
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["_category_0", "custom", "_category_2"]);
    }

    #[test]
    fn test_parse_malformed_config() {
        let err = parse_release_config(b"tag: [unterminated").unwrap_err();
        assert!(matches!(err, RelnotesError::Config(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_parse_null_tag() {
        for raw in [&b"tag: ~\n"[..], &b"tag: null\n"[..], &b"tag:\nname: ~\n"[..]] {
            let err = parse_release_config(raw).unwrap_err();
            assert_eq!(err.to_string(), "tag must be specified");
        }
    }

    #[test]
    fn test_parse_null_name_and_id() {
        let raw = b"tag: v1.0.0\nname: ~\ncommit-categories:\n  - id: ~\n    title: All\n";
        let config = parse_release_config(raw).unwrap();
        assert!(config.name.is_empty());
        assert_eq!(config.commit_categories[0].id, "_category_0");
    }

    #[test]
    fn test_parse_category_without_title() {
        let raw = b"tag: v1.0.0\ncommit-categories:\n  - id: x\n    contains: [a]\n";
        let err = parse_release_config(raw).unwrap_err();
        assert!(matches!(
            err,
            RelnotesError::Config(ConfigError::InvalidValue { ref field, .. })
                if field == "commit-categories[0].title"
        ));
    }

    #[test]
    fn test_missing_tag_wins_over_untitled_category() {
        let raw = b"name: hello\ncommit-categories:\n  - id: x\n    contains: [a]\n";
        let err = parse_release_config(raw).unwrap_err();
        assert_eq!(err.to_string(), "tag must be specified");
    }

    #[test]
    fn test_explicit_synthesized_id_collision() {
        let raw = b"tag: v1.0.0\ncommit-categories:\n  - id: _category_1\n    title: A\n    contains: [a]\n  - title: B\n";
        let err = parse_release_config(raw).unwrap_err().to_string();
        assert!(err.contains("commit-categories[1].id"));
        assert!(err.contains("given to categories declared without an id"));
    }

    #[test]
    fn test_default_template_parses() {
        let config = parse_release_config(DEFAULT_CONFIG_TEMPLATE.as_bytes()).unwrap();
        assert_eq!(config.tag, "v0.1.0");
        assert_eq!(config.commit_categories.len(), 4);
        assert_eq!(
            config.catch_all().map(|c| c.id.as_str()),
            Some("internal-change")
        );
    }

    #[test]
    fn test_find_config_release_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("RELEASE");
        std::fs::write(&config_path, "tag: v1.0.0\n").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_github_dir() {
        let temp = TempDir::new().unwrap();
        let github_dir = temp.path().join(".github");
        std::fs::create_dir_all(&github_dir).unwrap();
        let config_path = github_dir.join("release.yaml");
        std::fs::write(&config_path, "tag: v1.0.0\n").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_walks_parents() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("RELEASE");
        std::fs::write(&config_path, "tag: v1.0.0\n").unwrap();
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config(&nested);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_load_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("RELEASE");
        std::fs::write(&config_path, VALID_CONFIG).unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.tag, "v1.1.0");
        assert_eq!(config.commit_categories.len(), 4);
    }

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("release.toml");
        std::fs::write(
            &config_path,
            r#"
tag = "v2.0.0"

[commit-exclude]
prefixes = ["Merge pull request #"]

[[commit-categories]]
title = "Features"
contains = ["feat"]

[[commit-categories]]
id = "misc"
title = "Miscellaneous"

[release-note-generator]
show-abbrev-hash = true
"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.tag, "v2.0.0");
        assert_eq!(config.commit_categories[0].id, "_category_0");
        assert_eq!(config.commit_categories[0].matcher.contains, vec!["feat"]);
        assert_eq!(config.commit_categories[1].id, "misc");
        assert!(config.release_note_generator.show_abbrev_hash);
    }

    #[test]
    fn test_load_config_from_dir_not_found() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("empty");
        std::fs::create_dir_all(&nested).unwrap();
        // The walk continues above the temp dir, so only assert on the error
        // shape when nothing is found there either.
        if find_config(&nested).is_none() {
            let err = load_config_from_dir(&nested).unwrap_err();
            assert!(matches!(err, RelnotesError::Config(ConfigError::NotFound(_))));
        }
    }
}
