//! Template rendering for stackbake.
//! Paths, file contents and manifest defaults all go through MiniJinja.
use crate::error::Result;
use cruet::Inflector;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with the `kebab` filter registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("kebab", |value: String| value.to_kebab_case());
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse or fails to render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_variables() {
        let engine = MiniJinjaRenderer::new();
        let context = json!({"project_slug": "demo", "value": 42});

        assert_eq!(engine.render("cd {{ project_slug }}", &context).unwrap(), "cd demo");
        assert_eq!(engine.render("Value: {{ value }}", &context).unwrap(), "Value: 42");
    }

    #[test]
    fn kebab_filter_derives_slugs() {
        let engine = MiniJinjaRenderer::new();
        let context = json!({"project_name": "My Great Project"});

        let rendered = engine.render("{{ project_name | kebab }}", &context).unwrap();
        assert_eq!(rendered, "my-great-project");
    }

    #[test]
    fn keeps_trailing_newline() {
        let engine = MiniJinjaRenderer::new();
        let rendered = engine.render("name = \"{{ n }}\"\n", &json!({"n": "x"})).unwrap();
        assert_eq!(rendered, "name = \"x\"\n");
    }

    #[test]
    fn syntax_errors_are_reported() {
        let engine = MiniJinjaRenderer::new();
        assert!(engine.render("{{ unclosed", &json!({})).is_err());
    }
}
