//! Pre-generation checks. These run before any file is written.

use crate::constants::{JIRA_KEY_FILE, PROJECT_SLUG_PATTERN};
use crate::error::{Error, Result};
use crate::project::ProjectConfig;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static PROJECT_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PROJECT_SLUG_PATTERN).expect("slug pattern is valid"));

pub fn is_valid_project_slug(slug: &str) -> bool {
    PROJECT_SLUG_RE.is_match(slug)
}

/// Rejects slugs that cannot be used as a directory or package name.
///
/// # Errors
/// * `Error::ValidationError` unless the slug starts with a lowercase letter
///   followed by lowercase letters, digits or hyphens
pub fn validate_project_slug(config: &ProjectConfig) -> Result<()> {
    let slug = &config.project_slug;
    if !is_valid_project_slug(slug) {
        return Err(Error::ValidationError(format!(
            "'{slug}' is not a valid project slug. Must start with a lowercase letter and \
             contain only lowercase letters, numbers, and hyphens."
        )));
    }
    debug!("Project slug '{slug}' is valid");
    Ok(())
}

/// The warning to show when Jira is enabled without a project key.
pub fn jira_config_warning(config: &ProjectConfig) -> Option<String> {
    if config.enable_jira_integration && config.jira_project_key.trim().is_empty() {
        Some(format!(
            "WARNING: Jira integration enabled but no project key provided.\n\
             You can add the project key later in {JIRA_KEY_FILE}"
        ))
    } else {
        None
    }
}

/// Advisory only: prints the Jira warning, never fails.
pub fn validate_jira_config(config: &ProjectConfig) {
    if let Some(warning) = jira_config_warning(config) {
        println!("{warning}");
    }
}
