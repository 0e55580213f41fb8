use std::fs;
use std::path::Path;

use stackbake::cli::GitBackend;
use stackbake::error::Error;
use stackbake::generator::{generate, GenerateOptions};
use stackbake::hooks::VcsOutcome;
use stackbake::project::{Answers, Backend};
use stackbake::prompt::DefaultsPrompter;
use stackbake::renderer::MiniJinjaRenderer;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fullstack_template() -> TempDir {
    let template = TempDir::new().unwrap();
    write(
        &template.path().join("scaffold.yaml"),
        r#"
project_name: My Project
project_slug: "{{ project_name | kebab }}"
backend_choice: [python, node]
use_docker: [yes, no]
include_sample_app: [yes, no]
enable_jira_integration: [no, yes]
jira_project_key: ""
_commit_message: Bootstrap {{ project_slug }}
"#,
    );
    let root = template.path().join("{{ project_slug }}");
    write(&root.join("README.md.j2"), "# {{ project_name }}\nBackend: {{ backend_choice }}\n");
    write(&root.join("backend-python/app/__init__.py"), "");
    write(&root.join("backend-node/src/index.ts"), "");
    write(&root.join("docker-compose.yml"), "services: {}\n");
    write(&root.join(".dockerignore"), "node_modules\n");
    write(&root.join("frontend/src/App.tsx"), "");
    write(&root.join("frontend/src/components/TodoList.tsx"), "");
    write(&root.join("frontend/src/components/AddTodo.tsx"), "");
    write(&root.join("frontend/src/types/index.ts"), "");
    template
}

fn answers(pairs: &[(&str, &str)]) -> Answers {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn options(template: &TempDir, output: &TempDir, preloaded: Answers) -> GenerateOptions {
    GenerateOptions {
        template_root: template.path().to_path_buf(),
        output_dir: output.path().to_path_buf(),
        preloaded_answers: preloaded,
        force: false,
        git: None,
    }
}

#[test]
fn test_generate_with_defaults() {
    let template = fullstack_template();
    let output = TempDir::new().unwrap();

    let generated = generate(
        &MiniJinjaRenderer::new(),
        &DefaultsPrompter,
        options(&template, &output, Answers::new()),
    )
    .unwrap();

    let root = output.path().join("my-project");
    assert_eq!(generated.project_root, root);
    assert_eq!(generated.config.backend, Backend::Python);
    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        "# My Project\nBackend: python\n"
    );
    assert!(root.join("backend-python/app/__init__.py").exists());
    assert!(!root.join("backend-node").exists());
    assert!(root.join("docker-compose.yml").exists());
    assert!(root.join("frontend/src/components/TodoList.tsx").exists());
    assert!(generated.report.vcs.is_none());
}

#[test]
fn test_generate_node_without_extras() {
    let template = fullstack_template();
    let output = TempDir::new().unwrap();
    let preloaded = answers(&[
        ("project_slug", "shop"),
        ("backend_choice", "node"),
        ("use_docker", "no"),
        ("include_sample_app", "no"),
    ]);

    let generated =
        generate(&MiniJinjaRenderer::new(), &DefaultsPrompter, options(&template, &output, preloaded))
            .unwrap();

    let root = output.path().join("shop");
    assert!(root.join("backend-node/src/index.ts").exists());
    assert!(!root.join("backend-python").exists());
    assert!(!root.join("docker-compose.yml").exists());
    assert!(!root.join(".dockerignore").exists());
    assert!(!root.join("frontend/src/components/AddTodo.tsx").exists());
    assert!(root.join("frontend/src/App.tsx").exists());
    assert_eq!(generated.report.removed.len(), 6);
}

#[test]
fn test_invalid_slug_writes_nothing() {
    let template = fullstack_template();
    let output = TempDir::new().unwrap();

    let err = generate(
        &MiniJinjaRenderer::new(),
        &DefaultsPrompter,
        options(&template, &output, answers(&[("project_slug", "My_Project")])),
    )
    .unwrap_err();

    assert!(matches!(err, Error::ValidationError(_)));
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn test_generate_commits_with_manifest_message() {
    let template = fullstack_template();
    let output = TempDir::new().unwrap();
    let mut opts = options(&template, &output, answers(&[("project_slug", "demo")]));
    opts.git = Some(GitBackend::Libgit2);

    let generated = generate(&MiniJinjaRenderer::new(), &DefaultsPrompter, opts).unwrap();

    assert_eq!(generated.report.vcs, Some(VcsOutcome::Committed));
    let repo = git2::Repository::open(&generated.project_root).unwrap();
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.message(), Some("Bootstrap demo"));
}
