//! Answer collection: preloaded answers (file, stdin, `--set`) merged with
//! prompted or defaulted values for every manifest option.

use crate::config::TemplateOption;
use crate::error::{Error, Result};
use crate::project::Answers;
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use indexmap::IndexMap;
use log::debug;
use std::io::Read;
use std::path::Path;

/// Converts one answer value to its string form.
fn value_to_answer(key: &str, value: &serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Bool(true) => Ok("yes".into()),
        serde_json::Value::Bool(false) => Ok("no".into()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(Error::ConfigError(format!("answer for '{key}' must be a scalar value"))),
    }
}

/// Flattens a JSON object of answers into strings.
///
/// # Errors
/// * `Error::ConfigError` if the value is not an object or holds nested values
pub fn answers_from_value(value: &serde_json::Value) -> Result<Answers> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::ConfigError("answers must be a JSON object".into()))?;

    object
        .iter()
        .map(|(key, value)| Ok((key.clone(), value_to_answer(key, value)?)))
        .collect()
}

/// Parses answers given as JSON or YAML text. Blank input means no answers.
pub fn parse_answers(content: &str) -> Result<Answers> {
    if content.trim().is_empty() {
        return Ok(Answers::new());
    }
    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid answers format: {e}")))?,
    };
    answers_from_value(&value)
}

pub fn load_answers_file<P: AsRef<Path>>(path: P) -> Result<Answers> {
    let path = path.as_ref();
    debug!("Loading answers from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_answers(&content)
}

pub fn load_from_stdin() -> Result<Answers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

/// Parses `KEY=VALUE` overrides. The value may be empty or contain `=`.
pub fn parse_overrides<S: AsRef<str>>(overrides: &[S]) -> Result<Answers> {
    overrides
        .iter()
        .map(|entry| {
            let entry = entry.as_ref();
            match entry.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    Ok((key.trim().to_string(), value.to_string()))
                }
                _ => Err(Error::ConfigError(format!(
                    "invalid override '{entry}', expected KEY=VALUE"
                ))),
            }
        })
        .collect()
}

/// Merges answer sources; later sources win.
pub fn merge_answers<I: IntoIterator<Item = Answers>>(sources: I) -> Answers {
    let mut merged = Answers::new();
    for source in sources {
        merged.extend(source);
    }
    merged
}

fn answers_context(answers: &Answers) -> serde_json::Value {
    serde_json::Value::Object(
        answers
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect(),
    )
}

/// Resolves every manifest option, in order.
///
/// Preloaded answers are taken as-is, except that choice answers are matched
/// ignoring ASCII case and stored in the manifest's spelling. The rest are asked
/// through the prompter. Text defaults are rendered against the answers
/// collected so far. Preloaded keys unknown to the manifest are kept.
pub fn get_answers(
    engine: &dyn TemplateRenderer,
    prompt: &dyn Prompter,
    options: &IndexMap<String, TemplateOption>,
    preloaded: Answers,
) -> Result<Answers> {
    let mut answers = Answers::new();

    for (key, option) in options {
        let value = match (preloaded.get(key), option) {
            (Some(value), TemplateOption::Choice { choices }) => choices
                .iter()
                .find(|c| c.eq_ignore_ascii_case(value.trim()))
                .cloned()
                .ok_or_else(|| {
                    Error::ValidationError(format!(
                        "'{value}' is not a valid value for {key} (expected one of: {})",
                        choices.join(", ")
                    ))
                })?,
            (Some(value), TemplateOption::Text { .. }) => value.clone(),
            (None, TemplateOption::Choice { choices }) => prompt.select(key, choices)?,
            (None, TemplateOption::Text { .. }) => {
                let default = engine.render(option.default_value(), &answers_context(&answers))?;
                prompt.text(key, default)?
            }
        };
        debug!("Answer {key} = '{value}'");
        answers.insert(key.clone(), value);
    }

    for (key, value) in preloaded {
        answers.entry(key).or_insert(value);
    }

    Ok(answers)
}

/// Template context built from the answers.
pub fn build_context(answers: &Answers) -> serde_json::Value {
    answers_context(answers)
}
