use std::borrow::Cow;
use std::io::Write;
use std::process::{Command, Stdio};

use log::debug;

use super::request::ScrapeQuery;
use crate::error::{Error, Result};

/// One heterogeneous row as returned by the scraping backend.
pub type RawJob = serde_json::Map<String, serde_json::Value>;

/// The scraping backend.
pub trait JobScraper {
    fn scrape(&self, query: &ScrapeQuery) -> Result<Vec<RawJob>>;
}

/// Runs an external program: the query goes to its stdin as JSON, a JSON
/// array of rows is expected on its stdout.
#[derive(Debug, Clone)]
pub struct CommandScraper {
    program: String,
    args: Vec<String>,
}

impl CommandScraper {
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }

    /// Splits a command line on whitespace: the first word is the program.
    pub fn from_command_line(command_line: &str) -> Result<Self> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words
            .next()
            .ok_or_else(|| Error::ScraperError("scraper command is empty".into()))?;
        Ok(Self::new(program, words.collect()))
    }
}

impl JobScraper for CommandScraper {
    fn scrape(&self, query: &ScrapeQuery) -> Result<Vec<RawJob>> {
        debug!("Running scraper {} {:?}", self.program, self.args);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Error::ScraperError(format!("cannot run '{}': {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(serde_json::to_string(query)?.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::ScraperError(format!(
                "'{}' exited with {}",
                self.program, output.status
            )));
        }

        let stdout = std::str::from_utf8(&output.stdout)
            .map_err(|e| Error::ScraperError(format!("invalid scraper output: {e}")))?;
        parse_rows(stdout)
    }
}

const NON_FINITE_TOKENS: [&str; 3] = ["NaN", "-Infinity", "Infinity"];

/// Rewrites bare `NaN`, `Infinity` and `-Infinity` tokens outside string
/// literals to `null`. Dataframe dumps write missing numbers that way.
pub fn null_non_finite(raw: &str) -> Cow<'_, str> {
    if !NON_FINITE_TOKENS.iter().any(|token| raw.contains(token)) {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = raw;

    while let Some(ch) = rest.chars().next() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else if ch == '"' {
            in_string = true;
        } else if let Some(token) = NON_FINITE_TOKENS.iter().find(|t| rest.starts_with(**t)) {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    Cow::Owned(out)
}

/// Parses the scraper's JSON array of rows.
pub fn parse_rows(raw: &str) -> Result<Vec<RawJob>> {
    serde_json::from_str(&null_non_finite(raw))
        .map_err(|e| Error::ScraperError(format!("invalid scraper output: {e}")))
}
