//! CLI definition and command handling

pub mod commands;
pub mod feed;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use relnotes_core::config::{load_config, load_config_from_dir};
use relnotes_core::ReleaseConfig;

use commands::{ClassifyCommand, GenerateCommand, ValidateCommand};

/// relnotes - Categorized release note generation
#[derive(Debug, Parser)]
#[command(name = "relnotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Release configuration file (default: search for RELEASE upwards)
    #[arg(short, long, global = true, env = "RELNOTES_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify commits and render the release note
    Generate(GenerateCommand),

    /// Show how each commit is classified
    Classify(ClassifyCommand),

    /// Validate the release configuration
    Validate(ValidateCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Generate(ref cmd) => cmd.execute(&self),
            Commands::Classify(ref cmd) => cmd.execute(&self),
            Commands::Validate(ref cmd) => cmd.execute(&self),
        }
    }

    /// Load the release configuration from `--config` or by searching
    /// upwards from the current directory
    pub fn load_release_config(&self) -> relnotes_core::Result<(ReleaseConfig, PathBuf)> {
        match &self.config {
            Some(path) => {
                let config = load_config(path)?;
                Ok((config, path.clone()))
            }
            None => {
                let cwd = std::env::current_dir()?;
                let (config, path) = load_config_from_dir(&cwd)?;
                debug!(path = %path.display(), "using discovered config");
                Ok((config, path))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_args() {
        let cli = Cli::try_parse_from([
            "relnotes",
            "--format",
            "json",
            "-c",
            "RELEASE",
            "generate",
            "--commits",
            "commits.json",
            "--previous-tag",
            "v0.1.0",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config, Some(PathBuf::from("RELEASE")));
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.commits, PathBuf::from("commits.json"));
                assert_eq!(cmd.previous_tag.as_deref(), Some("v0.1.0"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_commits_default_to_stdin() {
        let cli = Cli::try_parse_from(["relnotes", "classify"]).unwrap();
        match cli.command {
            Commands::Classify(cmd) => assert_eq!(cmd.commits, PathBuf::from("-")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_load_explicit_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("custom.yaml");
        std::fs::write(&path, "tag: v3.0.0\n").unwrap();

        let cli = Cli::try_parse_from([
            "relnotes",
            "--config",
            path.to_str().unwrap(),
            "validate",
        ])
        .unwrap();

        let (config, found) = cli.load_release_config().unwrap();
        assert_eq!(config.tag, "v3.0.0");
        assert_eq!(found, path);
    }
}
