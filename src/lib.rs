//! stackbake is a project scaffolding tool for full-stack projects.
//! It validates the template configuration, materializes the template,
//! removes the branches the configuration did not select and bootstraps a
//! git repository. It also ships the sample to-do API and the job search
//! normalizer bundled with generated projects.

/// Command-line interface of the `stackbake` binary
pub mod cli;

/// Template manifest handling
/// Supports JSON and YAML formats (scaffold.json, scaffold.yml, scaffold.yaml)
pub mod config;

pub mod constants;

/// Error types and handling
pub mod error;

/// End-to-end generation pipeline
pub mod generator;

/// Pre and post generation hooks
pub mod hooks;

/// File and directory ignore patterns
/// Processes .scaffoldignore files to exclude specific paths
pub mod ignore;

/// Job search request handling and result normalization
pub mod jobs;

/// Template loading from local directories and git repositories
pub mod loader;

pub mod logger;

/// Answer collection from files, stdin, overrides and prompts
pub mod parser;

/// Template materialization
pub mod processor;

/// Typed project configuration
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// MiniJinja rendering
pub mod renderer;

/// In-memory to-do CRUD service
pub mod todo;
