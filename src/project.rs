//! Typed view over the collected answers.
//! The hooks only ever look at `ProjectConfig`; templates see the raw map.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Flat answer mapping, in manifest order.
pub type Answers = IndexMap<String, String>;

/// Backend subtree that survives generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Python,
    Node,
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" => Ok(Backend::Python),
            "node" => Ok(Backend::Node),
            other => Err(Error::ValidationError(format!(
                "backend_choice must be one of: python, node (got '{other}')"
            ))),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Python => write!(f, "python"),
            Backend::Node => write!(f, "node"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub project_name: String,
    pub project_slug: String,
    pub backend: Backend,
    pub use_docker: bool,
    pub include_sample_app: bool,
    pub enable_jira_integration: bool,
    pub jira_project_key: String,
}

fn parse_yes_no(key: &str, value: Option<&String>, default: bool) -> Result<bool> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(Error::ValidationError(format!(
            "{key} must be one of: yes, no (got '{other}')"
        ))),
    }
}

impl ProjectConfig {
    /// Builds the typed configuration from collected answers.
    ///
    /// The slug is only required to be present here; its format is checked by
    /// the pre-generation hook.
    pub fn from_answers(answers: &Answers) -> Result<Self> {
        let project_slug = answers
            .get("project_slug")
            .cloned()
            .ok_or_else(|| Error::ConfigError("missing required option 'project_slug'".into()))?;

        let project_name = answers
            .get("project_name")
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| project_slug.clone());

        let backend = match answers.get("backend_choice") {
            Some(value) => value.parse()?,
            None => Backend::Python,
        };

        Ok(Self {
            project_name,
            project_slug,
            backend,
            use_docker: parse_yes_no("use_docker", answers.get("use_docker"), true)?,
            include_sample_app: parse_yes_no(
                "include_sample_app",
                answers.get("include_sample_app"),
                true,
            )?,
            enable_jira_integration: parse_yes_no(
                "enable_jira_integration",
                answers.get("enable_jira_integration"),
                false,
            )?,
            jira_project_key: answers.get("jira_project_key").cloned().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> Answers {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn applies_defaults() {
        let config = ProjectConfig::from_answers(&answers(&[("project_slug", "demo")])).unwrap();
        assert_eq!(config.project_name, "demo");
        assert_eq!(config.backend, Backend::Python);
        assert!(config.use_docker);
        assert!(config.include_sample_app);
        assert!(!config.enable_jira_integration);
        assert_eq!(config.jira_project_key, "");
    }

    #[test]
    fn reads_every_option() {
        let config = ProjectConfig::from_answers(&answers(&[
            ("project_name", "Demo App"),
            ("project_slug", "demo-app"),
            ("backend_choice", "node"),
            ("use_docker", "no"),
            ("include_sample_app", "No"),
            ("enable_jira_integration", "YES"),
            ("jira_project_key", "DEMO"),
        ]))
        .unwrap();

        assert_eq!(config.project_name, "Demo App");
        assert_eq!(config.backend, Backend::Node);
        assert!(!config.use_docker);
        assert!(!config.include_sample_app);
        assert!(config.enable_jira_integration);
        assert_eq!(config.jira_project_key, "DEMO");
    }

    #[test]
    fn rejects_unknown_backend() {
        let err = ProjectConfig::from_answers(&answers(&[
            ("project_slug", "demo"),
            ("backend_choice", "ruby"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("backend_choice must be one of: python, node"));
    }

    #[test]
    fn rejects_non_yes_no_flags() {
        let err = ProjectConfig::from_answers(&answers(&[
            ("project_slug", "demo"),
            ("use_docker", "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[test]
    fn requires_slug() {
        let err = ProjectConfig::from_answers(&Answers::new()).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}
