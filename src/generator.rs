//! End-to-end generation: answers → validation → materialization → finishing.

use std::path::PathBuf;

use log::debug;

use crate::cli::{Args, GitBackend};
use crate::config::get_config;
use crate::constants::{DEFAULT_COMMIT_MESSAGE, IGNORE_FILE};
use crate::error::Result;
use crate::hooks::{run_post_gen, run_pre_gen, GitCommand, Libgit2, PostGenReport, VersionControl};
use crate::ignore::parse_ignore_file;
use crate::parser::{
    build_context, get_answers, load_answers_file, load_from_stdin, merge_answers,
    parse_overrides,
};
use crate::processor::materialize;
use crate::project::{Answers, ProjectConfig};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;

/// Everything one generation run needs once the template is available locally.
#[derive(Debug)]
pub struct GenerateOptions {
    pub template_root: PathBuf,
    pub output_dir: PathBuf,
    pub preloaded_answers: Answers,
    pub force: bool,
    /// `None` disables the version control bootstrap.
    pub git: Option<GitBackend>,
}

#[derive(Debug)]
pub struct Generated {
    pub project_root: PathBuf,
    pub config: ProjectConfig,
    pub answers: Answers,
    pub report: PostGenReport,
}

/// Collects preloaded answers from the answers file, stdin and `--set`
/// overrides, in increasing priority.
pub fn preloaded_answers(args: &Args) -> Result<Answers> {
    let from_file = match &args.answers {
        Some(path) => load_answers_file(path)?,
        None => Answers::new(),
    };
    let from_stdin = if args.stdin { load_from_stdin()? } else { Answers::new() };
    let overrides = parse_overrides(&args.overrides)?;
    Ok(merge_answers([from_file, from_stdin, overrides]))
}

fn version_control(backend: GitBackend) -> Box<dyn VersionControl> {
    match backend {
        GitBackend::Libgit2 => Box::new(Libgit2),
        GitBackend::Command => Box::new(GitCommand::default()),
    }
}

/// Runs the whole pipeline. Nothing is written before the pre-generation
/// checks pass.
pub fn generate(
    engine: &dyn TemplateRenderer,
    prompt: &dyn Prompter,
    options: GenerateOptions,
) -> Result<Generated> {
    let manifest = get_config(&options.template_root)?;
    let answers = get_answers(engine, prompt, &manifest.options, options.preloaded_answers)?;
    let config = ProjectConfig::from_answers(&answers)?;

    run_pre_gen(&config)?;

    let context = build_context(&answers);
    let ignored = parse_ignore_file(options.template_root.join(IGNORE_FILE))?;
    let project_root = materialize(
        engine,
        &options.template_root,
        &options.output_dir,
        &context,
        &ignored,
        options.force,
    )?;
    debug!("Project materialized in '{}'", project_root.display());

    let vcs = options.git.map(version_control);
    let commit_message =
        engine.render(manifest.commit_message().unwrap_or(DEFAULT_COMMIT_MESSAGE), &context)?;
    let report = run_post_gen(&config, &project_root, vcs.as_deref(), &commit_message)?;

    Ok(Generated { project_root, config, answers, report })
}

