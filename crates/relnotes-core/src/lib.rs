//! Relnotes Core - Core library for release note generation
//!
//! This crate provides the error taxonomy, the release configuration model
//! and the commit record shared by the classifier and the CLI.

pub mod config;
pub mod error;
pub mod types;

pub use config::{
    parse_release_config, CommitCategoryConfig, CommitMatcherConfig, ReleaseConfig,
    ReleaseNoteGeneratorConfig,
};
pub use error::{ConfigError, RelnotesError, Result};
pub use types::Commit;
