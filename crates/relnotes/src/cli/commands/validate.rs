//! Validate command

use clap::Args;
use console::style;
use tracing::info;

use crate::cli::{output, Cli, OutputFormat};

/// Validate the release configuration
#[derive(Debug, Args)]
pub struct ValidateCommand {}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing validate command");

        let (config, config_path, error) = match cli.load_release_config() {
            Ok((config, path)) => (Some(config), Some(path), None),
            Err(e) => (None, cli.config.clone(), Some(e)),
        };

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "valid": error.is_none(),
                    "config_path": config_path.map(|p| p.to_string_lossy().to_string()),
                    "config": config,
                    "errors": error.iter().map(ToString::to_string).collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", output::header("Release Configuration"));
                    println!();

                    if let Some(path) = &config_path {
                        println!(
                            "{}",
                            output::key_value("Config", &style(path.display()).cyan().to_string())
                        );
                    }

                    if let Some(config) = &config {
                        println!(
                            "{}",
                            output::key_value("Tag", &style(&config.tag).yellow().to_string())
                        );
                        if !config.name.is_empty() {
                            println!("{}", output::key_value("Name", &config.name));
                        }
                        if config.prerelease {
                            println!("{}", output::key_value("Prerelease", "yes"));
                        }
                        println!();

                        if config.has_categories() {
                            println!("{}", style("Categories").underlined());
                            for category in &config.commit_categories {
                                let marker = if category.is_catch_all() {
                                    style(" (catch-all)").dim().to_string()
                                } else {
                                    String::new()
                                };
                                println!(
                                    "  {} {}{}",
                                    style(&category.id).magenta(),
                                    category.title,
                                    marker
                                );
                            }
                            println!();
                        } else {
                            println!(
                                "  {}",
                                style("No categories; all commits render as uncategorized")
                                    .yellow()
                            );
                            println!();
                        }
                    }
                }

                if error.is_none() && !cli.quiet {
                    output::success("Configuration is valid");
                }
            }
        }

        match error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}
