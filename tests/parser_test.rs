use stackbake::{
    config::parse_config,
    error::Error,
    parser::{answers_from_value, get_answers, merge_answers, parse_answers, parse_overrides},
    project::Answers,
    prompt::DefaultsPrompter,
    renderer::MiniJinjaRenderer,
};
use serde_json::json;

const MANIFEST: &str = r#"
project_name: My Project
project_slug: "{{ project_name | kebab }}"
backend_choice: [python, node]
use_docker: [yes, no]
enable_jira_integration: [no, yes]
jira_project_key: ""
"#;

fn answers(pairs: &[(&str, &str)]) -> Answers {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_defaults_render_against_earlier_answers() {
    let manifest = parse_config(MANIFEST).unwrap();
    let result = get_answers(
        &MiniJinjaRenderer::new(),
        &DefaultsPrompter,
        &manifest.options,
        answers(&[("project_name", "Todo Board")]),
    )
    .unwrap();

    assert_eq!(result["project_name"], "Todo Board");
    assert_eq!(result["project_slug"], "todo-board");
    assert_eq!(result["backend_choice"], "python");
    assert_eq!(result["use_docker"], "yes");
    assert_eq!(result["enable_jira_integration"], "no");
    assert_eq!(result["jira_project_key"], "");
}

#[test]
fn test_answers_keep_manifest_order_and_extra_keys() {
    let manifest = parse_config(MANIFEST).unwrap();
    let result = get_answers(
        &MiniJinjaRenderer::new(),
        &DefaultsPrompter,
        &manifest.options,
        answers(&[("author", "Ada"), ("backend_choice", "node")]),
    )
    .unwrap();

    let keys: Vec<_> = result.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "project_name",
            "project_slug",
            "backend_choice",
            "use_docker",
            "enable_jira_integration",
            "jira_project_key",
            "author"
        ]
    );
    assert_eq!(result["backend_choice"], "node");
}

#[test]
fn test_preloaded_choice_must_be_listed() {
    let manifest = parse_config(MANIFEST).unwrap();
    let err = get_answers(
        &MiniJinjaRenderer::new(),
        &DefaultsPrompter,
        &manifest.options,
        answers(&[("backend_choice", "ruby")]),
    )
    .unwrap_err();

    match err {
        Error::ValidationError(msg) => assert!(msg.contains("expected one of: python, node")),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_preloaded_choice_ignores_case() {
    let manifest = parse_config(MANIFEST).unwrap();
    let result = get_answers(
        &MiniJinjaRenderer::new(),
        &DefaultsPrompter,
        &manifest.options,
        answers(&[("use_docker", "No"), ("backend_choice", "NODE")]),
    )
    .unwrap();

    assert_eq!(result["use_docker"], "no");
    assert_eq!(result["backend_choice"], "node");
}

#[test]
fn test_answers_from_json_values() {
    let parsed = answers_from_value(&json!({
        "project_slug": "demo",
        "use_docker": false,
        "include_sample_app": true,
        "port": 8080,
        "jira_project_key": null
    }))
    .unwrap();

    assert_eq!(parsed["project_slug"], "demo");
    assert_eq!(parsed["use_docker"], "no");
    assert_eq!(parsed["include_sample_app"], "yes");
    assert_eq!(parsed["port"], "8080");
    assert_eq!(parsed["jira_project_key"], "");
}

#[test]
fn test_nested_answers_are_rejected() {
    assert!(answers_from_value(&json!({"nested": {"a": 1}})).is_err());
    assert!(answers_from_value(&json!(["not", "an", "object"])).is_err());
}

#[test]
fn test_parse_answers_formats() {
    assert!(parse_answers("").unwrap().is_empty());
    assert!(parse_answers("   \n").unwrap().is_empty());
    assert_eq!(parse_answers(r#"{"project_slug": "demo"}"#).unwrap()["project_slug"], "demo");
    assert_eq!(parse_answers("project_slug: demo\n").unwrap()["project_slug"], "demo");
    assert!(parse_answers("{ not valid").is_err());
}

#[test]
fn test_parse_overrides() {
    let parsed = parse_overrides(&["backend_choice=node", "jira_project_key=", "motto=a=b"]).unwrap();
    assert_eq!(parsed["backend_choice"], "node");
    assert_eq!(parsed["jira_project_key"], "");
    assert_eq!(parsed["motto"], "a=b");

    assert!(parse_overrides(&["missing-separator"]).is_err());
    assert!(parse_overrides(&["=value"]).is_err());
}

#[test]
fn test_later_sources_win() {
    let merged = merge_answers([
        answers(&[("project_slug", "from-file"), ("use_docker", "yes")]),
        answers(&[("project_slug", "from-stdin")]),
        answers(&[("use_docker", "no")]),
    ]);
    assert_eq!(merged["project_slug"], "from-stdin");
    assert_eq!(merged["use_docker"], "no");
}
