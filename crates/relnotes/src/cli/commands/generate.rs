//! Generate command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use relnotes_changelog::{MarkdownFormatter, ReleaseNoteGenerator};

use crate::cli::feed::read_commits;
use crate::cli::{output, Cli, OutputFormat};

/// Classify commits and render the release note
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// JSON array of commits to classify (`-` reads stdin)
    #[arg(long, value_name = "FILE", default_value = "-")]
    pub commits: PathBuf,

    /// Tag of the previous release, shown in the header
    #[arg(long, value_name = "TAG")]
    pub previous_tag: Option<String>,

    /// Repository URL used for commit and compare links
    #[arg(long, value_name = "URL")]
    pub repo_url: Option<String>,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            commits = %self.commits.display(),
            previous_tag = ?self.previous_tag,
            "executing generate command"
        );

        // Configuration errors abort before any commit is read
        let (config, config_path) = cli.load_release_config()?;
        let commits = read_commits(&self.commits)?;

        let formatter = match &self.repo_url {
            Some(url) => MarkdownFormatter::new().with_repo_url(url),
            None => MarkdownFormatter::new(),
        };
        let generator = ReleaseNoteGenerator::new(config).with_formatter(formatter);

        let proposal = generator.propose(self.previous_tag.as_deref().unwrap_or(""), &commits);
        if proposal.commits.is_empty() && !cli.quiet {
            output::warning(&format!(
                "None of the {} commit(s) were selected for {}",
                commits.len(),
                proposal.title()
            ));
        }

        let note = generator.format(&proposal);

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "config_path": config_path.to_string_lossy(),
                    "proposal": proposal,
                    "release_note": note,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                print!("{}", note);
            }
        }

        Ok(())
    }
}
