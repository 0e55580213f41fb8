use crate::constants::BANNER_WIDTH;
use crate::project::ProjectConfig;

/// Builds the onboarding banner printed after a successful generation.
pub fn summary_text(config: &ProjectConfig) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let mut out = format!(
        "\n{rule}\n\
         SUCCESS! Created {name}\n\
         {rule}\n\
         \nNext steps:\n\
         \x20 cd {slug}\n\
         \nUseful commands:\n\
         \x20 make dev      # Start development servers\n\
         \x20 make test     # Run all tests\n\
         \x20 make lint     # Lint all code\n",
        name = config.project_name,
        slug = config.project_slug,
    );
    if config.enable_jira_integration {
        out.push_str(
            "\nJira Integration:\n\
             \x20 The Atlassian MCP server is configured.\n\
             \x20 On first Jira command, authenticate via OAuth in your browser.\n",
        );
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

pub fn print_summary(config: &ProjectConfig) {
    println!("{}", summary_text(config));
}
