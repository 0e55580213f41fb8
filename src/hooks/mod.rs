//! Pre and post generation hooks.
//!
//! - pre-generation: project slug validation (fatal) and Jira advice
//! - post-generation: removal of unselected paths, version control bootstrap
//!   and the onboarding summary

pub mod pre_gen;
pub mod removal;
pub mod summary;
pub mod vcs;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::project::ProjectConfig;

pub use pre_gen::{jira_config_warning, validate_jira_config, validate_project_slug};
pub use removal::{remove_unselected_paths, removal_rules, RemovalRule};
pub use summary::{print_summary, summary_text};
pub use vcs::{initialize_version_control, GitCommand, Libgit2, VcsOutcome, VersionControl};

/// Runs the pre-generation checks.
///
/// # Errors
/// * `Error::ValidationError` if the project slug is invalid
pub fn run_pre_gen(config: &ProjectConfig) -> Result<()> {
    validate_project_slug(config)?;
    validate_jira_config(config);
    Ok(())
}

/// What the post-generation hook did.
#[derive(Debug)]
pub struct PostGenReport {
    pub removed: Vec<PathBuf>,
    /// `None` when version control was disabled.
    pub vcs: Option<VcsOutcome>,
}

/// Runs removal, version control bootstrap and summary, in that order.
/// Only the removal step can fail the run.
pub fn run_post_gen(
    config: &ProjectConfig,
    tree_root: &Path,
    vcs: Option<&dyn VersionControl>,
    commit_message: &str,
) -> Result<PostGenReport> {
    let removed = remove_unselected_paths(&removal_rules(config), tree_root)?;
    let vcs = vcs.map(|vcs| initialize_version_control(vcs, tree_root, commit_message));
    print_summary(config);
    Ok(PostGenReport { removed, vcs })
}
