//! Common constants used throughout the stackbake application.

/// Supported template manifest file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["scaffold.json", "scaffold.yml", "scaffold.yaml"];

/// Name of the ignore file at the template root
pub const IGNORE_FILE: &str = ".scaffoldignore";

/// Patterns that are never materialized, whatever the ignore file says
pub const DEFAULT_IGNORE_PATTERNS: [&str; 3] = ["**/.DS_Store", "**/.git", "**/.git/**"];

/// Accepted shape of `project_slug`
pub const PROJECT_SLUG_PATTERN: &str = r"^[a-z][a-z0-9-]*$";

pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit from stackbake";

/// Signature used for the initial commit when git has no user configured
pub const FALLBACK_COMMIT_NAME: &str = "stackbake";
pub const FALLBACK_COMMIT_EMAIL: &str = "stackbake@localhost";

/// Width of the `=` rules framing the summary banner
pub const BANNER_WIDTH: usize = 60;

/// Generated file where a missing Jira project key is filled in later
pub const JIRA_KEY_FILE: &str = "CLAUDE.md";
