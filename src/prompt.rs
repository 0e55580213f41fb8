//! User input and interaction handling.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, Select};

/// Source of answers for options that were not preloaded.
pub trait Prompter {
    /// Asks for free text, offering `default`.
    fn text(&self, key: &str, default: String) -> Result<String>;

    /// Asks the user to pick one of `choices`; the first one is the default.
    fn select(&self, key: &str, choices: &[String]) -> Result<String>;

    /// Yes/no question. `skip` short-circuits to `true`.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;
}

/// Interactive prompter backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, key: &str, default: String) -> Result<String> {
        Input::new()
            .with_prompt(key)
            .default(default)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::ConfigError(e.to_string()))
    }

    fn select(&self, key: &str, choices: &[String]) -> Result<String> {
        let selection = Select::new()
            .with_prompt(key)
            .default(0)
            .items(choices)
            .interact()
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        Ok(choices[selection].clone())
    }

    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| Error::ConfigError(e.to_string()))
    }
}

/// Non-interactive prompter used with `--no-input`: every question takes its
/// default, every confirmation is declined unless skipped.
#[derive(Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn text(&self, _key: &str, default: String) -> Result<String> {
        Ok(default)
    }

    fn select(&self, key: &str, choices: &[String]) -> Result<String> {
        choices
            .first()
            .cloned()
            .ok_or_else(|| Error::ConfigError(format!("option '{key}' has no choices")))
    }

    fn confirm(&self, skip: bool, _prompt: String) -> Result<bool> {
        Ok(skip)
    }
}
