//! Template manifest handling.
//! Loads `scaffold.json` / `scaffold.yml` / `scaffold.yaml` from the template
//! root and turns each entry into a prompt-able option.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

/// One option declared by the manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateOption {
    /// Free text. The default may reference earlier answers.
    Text { default: String },
    /// One of a fixed set of values. The default is `choices[0]`.
    Choice { choices: Vec<String> },
}

impl TemplateOption {
    fn from_value(key: &str, value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(default) => Ok(Self::Text { default }),
            serde_json::Value::Number(n) => Ok(Self::Text { default: n.to_string() }),
            serde_json::Value::Bool(b) => {
                let choices = if b { ["yes", "no"] } else { ["no", "yes"] };
                Ok(Self::Choice { choices: choices.iter().map(|c| c.to_string()).collect() })
            }
            serde_json::Value::Array(items) => {
                let choices = items
                    .into_iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => Ok(s),
                        serde_json::Value::Number(n) => Ok(n.to_string()),
                        serde_json::Value::Bool(b) => Ok(if b { "yes" } else { "no" }.into()),
                        other => Err(Error::ConfigError(format!(
                            "choice '{other}' of option '{key}' is not a scalar"
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                if choices.is_empty() {
                    return Err(Error::ConfigError(format!("option '{key}' has no choices")));
                }
                Ok(Self::Choice { choices })
            }
            serde_json::Value::Null | serde_json::Value::Object(_) => Err(Error::ConfigError(
                format!("option '{key}' must be a string, number, boolean or list"),
            )),
        }
    }

    /// The value used when the user accepts the default.
    pub fn default_value(&self) -> &str {
        match self {
            Self::Text { default } => default,
            Self::Choice { choices } => &choices[0],
        }
    }
}

/// Parsed manifest: prompted options plus `_`-prefixed private settings.
#[derive(Debug, Default)]
pub struct Manifest {
    pub options: IndexMap<String, TemplateOption>,
    pub settings: IndexMap<String, serde_json::Value>,
}

impl Manifest {
    pub fn commit_message(&self) -> Option<&str> {
        self.settings.get("_commit_message").and_then(|v| v.as_str())
    }
}

/// Reads the first manifest found in the template directory.
///
/// # Errors
/// * `Error::ConfigError` if no manifest exists
pub fn load_config<P: AsRef<Path>>(template_dir: P, config_files: &[&str]) -> Result<String> {
    for file in config_files {
        let config_path = template_dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(std::fs::read_to_string(&config_path)?);
        }
    }

    Err(Error::ConfigError(format!(
        "No configuration file found (tried: {})",
        config_files.join(", ")
    )))
}

/// Parses manifest content. JSON is tried first, YAML second.
pub fn parse_config(content: &str) -> Result<Manifest> {
    let raw: IndexMap<String, serde_json::Value> = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))?,
    };

    let mut manifest = Manifest::default();
    for (key, value) in raw {
        if key.starts_with('_') {
            manifest.settings.insert(key, value);
        } else {
            let option = TemplateOption::from_value(&key, value)?;
            manifest.options.insert(key, option);
        }
    }

    Ok(manifest)
}

/// Loads and parses the manifest of a template directory.
pub fn get_config<P: AsRef<Path>>(template_dir: P) -> Result<Manifest> {
    let content = load_config(template_dir, &CONFIG_FILES)?;
    parse_config(&content)
}
