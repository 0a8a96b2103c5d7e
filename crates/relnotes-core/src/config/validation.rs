//! Configuration validation

use std::collections::HashSet;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::defaults::CATEGORY_ID_PREFIX;
use super::types::ReleaseConfig;

/// Validate configuration
pub fn validate_config(config: &ReleaseConfig) -> Result<()> {
    debug!("validating release configuration");
    validate_tag(config)?;
    validate_categories(config)?;
    debug!("release configuration validation passed");
    Ok(())
}

fn validate_tag(config: &ReleaseConfig) -> Result<()> {
    if config.tag.is_empty() {
        return Err(ConfigError::MissingField("tag".to_string()).into());
    }
    Ok(())
}

fn validate_categories(config: &ReleaseConfig) -> Result<()> {
    if !config.commit_categories.is_empty() {
        debug!(
            count = config.commit_categories.len(),
            "validating commit categories"
        );
    }

    let mut seen = HashSet::new();
    let mut catch_all: Option<&str> = None;

    for (i, category) in config.commit_categories.iter().enumerate() {
        if category.id.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("commit-categories[{}].id", i),
                message: "category id cannot be empty".to_string(),
            }
            .into());
        }

        if !seen.insert(category.id.as_str()) {
            let mut message = format!("duplicate category id '{}'", category.id);
            if category.id.starts_with(CATEGORY_ID_PREFIX) {
                message.push_str(&format!(
                    " (ids starting with '{}' are given to categories declared without an id)",
                    CATEGORY_ID_PREFIX
                ));
            }
            return Err(ConfigError::InvalidValue {
                field: format!("commit-categories[{}].id", i),
                message,
            }
            .into());
        }

        if category.title.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("commit-categories[{}].title", i),
                message: format!("category '{}' needs a title", category.id),
            }
            .into());
        }

        if category.is_catch_all() {
            if let Some(first) = catch_all {
                return Err(ConfigError::InvalidValue {
                    field: format!("commit-categories[{}]", i),
                    message: format!(
                        "only one category may omit match rules, '{}' already does",
                        first
                    ),
                }
                .into());
            }
            catch_all = Some(category.id.as_str());
        }
    }

    Ok(())
}
