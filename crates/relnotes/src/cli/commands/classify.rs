//! Classify command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use relnotes_changelog::build_release_commits;

use crate::cli::feed::read_commits;
use crate::cli::{output, Cli, OutputFormat};

/// Show how each commit is classified
#[derive(Debug, Args)]
pub struct ClassifyCommand {
    /// JSON array of commits to classify (`-` reads stdin)
    #[arg(long, value_name = "FILE", default_value = "-")]
    pub commits: PathBuf,
}

impl ClassifyCommand {
    /// Execute the classify command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(commits = %self.commits.display(), "executing classify command");

        let (config, _) = cli.load_release_config()?;
        let commits = read_commits(&self.commits)?;
        let release_commits = build_release_commits(&commits, &config);

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&release_commits)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!(
                        "{}",
                        output::header(&format!(
                            "Selected {} of {} commits for {}",
                            release_commits.len(),
                            commits.len(),
                            style(&config.tag).yellow()
                        ))
                    );
                    println!();
                }

                for commit in &release_commits {
                    let category = match config.category(&commit.category_id) {
                        Some(category) => style(&category.title).magenta().to_string(),
                        None => style("uncategorized").dim().to_string(),
                    };
                    let date = commit
                        .commit
                        .timestamp
                        .map(|t| t.format("%Y-%m-%d").to_string())
                        .unwrap_or_default();
                    let first_line = commit.release_note.lines().next().unwrap_or_default();

                    println!(
                        "  {:<7} {:<10} {} {}",
                        commit.commit.short_hash(),
                        date,
                        first_line,
                        style(format!("[{}]", category)).dim()
                    );
                }
            }
        }

        Ok(())
    }
}
