//! Default configuration values

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "RELEASE";

/// Alternative configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "release.yaml";

/// Alternative configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "release.toml";

/// Prefix for ids synthesized for categories declared without one
pub const CATEGORY_ID_PREFIX: &str = "_category_";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_FILE,
        DEFAULT_CONFIG_YAML,
        "release.yml",
        DEFAULT_CONFIG_TOML,
    ]
}

/// Id given to the category at `index` when none is declared
pub fn synthesized_category_id(index: usize) -> String {
    format!("{}{}", CATEGORY_ID_PREFIX, index)
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Release configuration
tag: v0.1.0
name: ""
prerelease: false

commit-include:
  contains: []

commit-exclude:
  prefixes:
    - "Merge pull request #"

# Categories without an id are named _category_<index>; avoid that
# prefix for explicit ids.
commit-categories:
  - id: breaking-change
    title: Breaking Changes
    contains:
      - change-category/breaking-change
  - id: new-feature
    title: New Features
    contains:
      - change-category/new-feature
  - id: notable-change
    title: Notable Changes
    contains:
      - change-category/notable-change
  - id: internal-change
    title: Internal Changes

release-note-generator:
  show-committer: false
  show-abbrev-hash: false
  use-release-note-block: true
"#;
