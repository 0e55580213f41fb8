//! Error handling for the stackbake application.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Custom error types for stackbake operations.
///
/// This enum represents all possible errors that can occur while collecting
/// answers, validating them, materializing a template or finishing the
/// generated tree. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    /// Represents errors raised by the MiniJinja engine while rendering
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    TemplateError(String),

    #[error("Template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },

    /// Represents errors that occur during manifest or answer parsing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures in user input
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Represents errors in processing .scaffoldignore files
    #[error("Ignore file error: {0}.")]
    IgnoreError(String),

    #[error("Cannot remove '{path}': {source}.")]
    RemovalError { path: String, source: io::Error },

    /// Represents failures of a version control step
    #[error("{0}")]
    VcsError(String),

    /// Represents invalid job search requests
    #[error("{0}")]
    JobSearchError(String),

    #[error("Job scraper failed: {0}")]
    ScraperError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
