//! Version control bootstrap of the generated tree.
//!
//! The bootstrap is best effort: any failure is reported as a warning and the
//! user keeps the generated files without a repository.

use crate::constants::{FALLBACK_COMMIT_EMAIL, FALLBACK_COMMIT_NAME};
use crate::error::{Error, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The three steps of a repository bootstrap.
pub trait VersionControl {
    fn name(&self) -> &'static str;
    fn init(&self, root: &Path) -> Result<()>;
    fn stage_all(&self, root: &Path) -> Result<()>;
    fn commit(&self, root: &Path, message: &str) -> Result<()>;
}

/// In-process git through libgit2.
#[derive(Debug, Default)]
pub struct Libgit2;

impl VersionControl for Libgit2 {
    fn name(&self) -> &'static str {
        "libgit2"
    }

    fn init(&self, root: &Path) -> Result<()> {
        git2::Repository::init(root)?;
        Ok(())
    }

    fn stage_all(&self, root: &Path) -> Result<()> {
        let repo = git2::Repository::open(root)?;
        let mut index = repo.index()?;
        index.add_all(["*"], git2::IndexAddOption::DEFAULT, None)?;
        index.write()?;
        Ok(())
    }

    fn commit(&self, root: &Path, message: &str) -> Result<()> {
        let repo = git2::Repository::open(root)?;
        let mut index = repo.index()?;
        let tree = repo.find_tree(index.write_tree()?)?;
        let signature = repo
            .signature()
            .or_else(|_| git2::Signature::now(FALLBACK_COMMIT_NAME, FALLBACK_COMMIT_EMAIL))?;
        repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &[])?;
        Ok(())
    }
}

/// The `git` executable, one subprocess per step.
#[derive(Debug)]
pub struct GitCommand {
    program: PathBuf,
}

impl Default for GitCommand {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCommand {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self { program: program.into() }
    }

    fn run(&self, root: &Path, args: &[&str]) -> Result<()> {
        debug!("Running {} {}", self.program.display(), args.join(" "));
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(root)
            .output()
            .map_err(|e| {
                Error::VcsError(format!("failed to run '{}': {e}", self.program.display()))
            })?;

        if !output.status.success() {
            return Err(Error::VcsError(format!(
                "'git {}' failed with {}: {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }
}

impl VersionControl for GitCommand {
    fn name(&self) -> &'static str {
        "git"
    }

    fn init(&self, root: &Path) -> Result<()> {
        self.run(root, &["init"])
    }

    fn stage_all(&self, root: &Path) -> Result<()> {
        self.run(root, &["add", "."])
    }

    fn commit(&self, root: &Path, message: &str) -> Result<()> {
        self.run(root, &["commit", "-m", message])
    }
}

/// Result of a bootstrap attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsOutcome {
    Committed,
    Failed(String),
}

/// Guards one bootstrap run. Unless `complete` is called, dropping it removes
/// the `.git` directory this run created and logs the abandoned run.
struct BootstrapScope {
    git_dir: PathBuf,
    created_by_us: bool,
    completed: bool,
}

impl BootstrapScope {
    fn enter(root: &Path) -> Self {
        let git_dir = root.join(".git");
        let created_by_us = !git_dir.exists();
        Self { git_dir, created_by_us, completed: false }
    }

    fn complete(mut self) {
        self.completed = true;
    }
}

impl Drop for BootstrapScope {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        warn!("Version control bootstrap did not complete");
        if self.created_by_us && self.git_dir.exists() {
            match fs::remove_dir_all(&self.git_dir) {
                Ok(()) => debug!("Removed partial repository '{}'", self.git_dir.display()),
                Err(e) => warn!("Cannot remove '{}': {e}", self.git_dir.display()),
            }
        }
    }
}

fn bootstrap(vcs: &dyn VersionControl, root: &Path, message: &str) -> Result<()> {
    let scope = BootstrapScope::enter(root);
    vcs.init(root)?;
    vcs.stage_all(root)?;
    vcs.commit(root, message)?;
    scope.complete();
    Ok(())
}

/// Initializes a repository at `tree_root`, stages everything and commits once.
/// Failures are printed as a warning and returned, never propagated.
pub fn initialize_version_control(
    vcs: &dyn VersionControl,
    tree_root: &Path,
    message: &str,
) -> VcsOutcome {
    debug!("Initializing repository in '{}' with {}", tree_root.display(), vcs.name());
    match bootstrap(vcs, tree_root, message) {
        Ok(()) => {
            println!("Initialized git repository with initial commit");
            VcsOutcome::Committed
        }
        Err(e) => {
            println!("Warning: Git initialization failed: {e}");
            VcsOutcome::Failed(e.to_string())
        }
    }
}
