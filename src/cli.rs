//! Command-line interface implementation for stackbake.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;

/// How the generated project gets its initial commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GitBackend {
    /// In-process libgit2
    Libgit2,
    /// The `git` executable
    Command,
}

/// Command-line arguments structure for stackbake.
#[derive(Parser, Debug)]
#[command(author, version, about = "stackbake: full-stack project scaffolding", long_about = None)]
pub struct Args {
    /// Path to the template directory or git repository URL
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Directory in which the project directory will be created
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Force overwrite of an existing project directory
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Read answers as a JSON object from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Read answers from a JSON or YAML file
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Set an answer, e.g. --set backend_choice=node (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Do not prompt; unanswered options take their defaults
    #[arg(long)]
    pub no_input: bool,

    /// Skip confirmation prompts when replacing an existing template clone.
    #[arg(long)]
    pub skip_overwrite_check: bool,

    /// Do not initialize a git repository in the generated project
    #[arg(long)]
    pub no_git: bool,

    /// Backend used for the initial commit
    #[arg(long, value_enum, default_value_t = GitBackend::Libgit2)]
    pub git_backend: GitBackend,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
