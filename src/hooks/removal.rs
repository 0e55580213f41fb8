//! Removal of template branches the configuration did not select.

use crate::error::{Error, Result};
use crate::project::{Backend, ProjectConfig};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// A path relative to the generated tree, removed when `remove` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRule {
    pub remove: bool,
    pub path: PathBuf,
}

impl RemovalRule {
    pub fn new<P: Into<PathBuf>>(remove: bool, path: P) -> Self {
        Self { remove, path: path.into() }
    }
}

/// The fixed rule list, evaluated against the typed configuration.
pub fn removal_rules(config: &ProjectConfig) -> Vec<RemovalRule> {
    vec![
        RemovalRule::new(config.backend == Backend::Python, "backend-node"),
        RemovalRule::new(config.backend == Backend::Node, "backend-python"),
        RemovalRule::new(!config.use_docker, "docker-compose.yml"),
        RemovalRule::new(!config.use_docker, ".dockerignore"),
        RemovalRule::new(!config.include_sample_app, "frontend/src/components/TodoList.tsx"),
        RemovalRule::new(!config.include_sample_app, "frontend/src/components/AddTodo.tsx"),
        RemovalRule::new(!config.include_sample_app, "frontend/src/types/index.ts"),
    ]
}

fn stays_inside_root(path: &Path) -> bool {
    path.components().any(|c| matches!(c, Component::Normal(_)))
        && path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Deletes every selected rule target below `tree_root` and returns the
/// paths that were actually removed. Missing targets are skipped, so running
/// this twice is harmless.
///
/// # Errors
/// * `Error::ConfigError` if a rule path is absolute or escapes the root
/// * `Error::RemovalError` if a deletion fails for a reason other than "not found"
pub fn remove_unselected_paths(rules: &[RemovalRule], tree_root: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for rule in rules.iter().filter(|rule| rule.remove) {
        if !stays_inside_root(&rule.path) {
            return Err(Error::ConfigError(format!(
                "removal path '{}' must be relative to the project root",
                rule.path.display()
            )));
        }

        let target = tree_root.join(&rule.path);
        let metadata = match fs::symlink_metadata(&target) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("'{}' already absent", rule.path.display());
                continue;
            }
            Err(source) => {
                return Err(Error::RemovalError { path: rule.path.display().to_string(), source })
            }
        };

        let (result, kind) = if metadata.is_dir() {
            (fs::remove_dir_all(&target), "directory")
        } else {
            (fs::remove_file(&target), "file")
        };
        match result {
            Ok(()) => {
                println!("Removed {kind}: {}", rule.path.display());
                removed.push(rule.path.clone());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => {
                return Err(Error::RemovalError { path: rule.path.display().to_string(), source })
            }
        }
    }

    Ok(removed)
}
