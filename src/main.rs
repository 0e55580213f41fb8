//! stackbake's main application entry point.
//! Handles command-line argument parsing and hands the run over to the
//! generation pipeline.

use stackbake::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    generator::{generate, preloaded_answers, GenerateOptions},
    loader::load_template,
    logger::init_logger,
    prompt::{DefaultsPrompter, DialoguerPrompter, Prompter},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the template (local path or git clone)
/// 2. Collects preloaded answers (file, stdin, overrides)
/// 3. Prompts for the remaining options unless `--no-input`
/// 4. Validates, materializes and finishes the project
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompt: Box<dyn Prompter> = if args.no_input {
        Box::new(DefaultsPrompter)
    } else {
        Box::new(DialoguerPrompter::new())
    };

    let template_root = load_template(&*prompt, &args.template, args.skip_overwrite_check)?;
    let preloaded_answers = preloaded_answers(&args)?;

    let options = GenerateOptions {
        template_root,
        output_dir: args.output_dir,
        preloaded_answers,
        force: args.force,
        git: (!args.no_git).then_some(args.git_backend),
    };

    let generated = generate(&engine, &*prompt, options)?;
    log::debug!(
        "Generated '{}' ({} path(s) removed)",
        generated.project_root.display(),
        generated.report.removed.len()
    );
    Ok(())
}
