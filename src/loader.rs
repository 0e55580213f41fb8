//! Template loading for stackbake.
//! A template is either a local directory or a git repository cloned with git2.
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Represents the source location of a template.
#[derive(Debug, PartialEq)]
pub enum TemplateSource {
    /// Local filesystem template path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS, git or SSH)
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

impl TemplateSource {
    /// Classifies a template argument as a git URL or a filesystem path.
    pub fn from_string(s: &str) -> Self {
        if let Ok(url) = Url::parse(s) {
            if matches!(url.scheme(), "https" | "git" | "ssh") {
                return Self::Git(s.to_string());
            }
        }

        if s.starts_with("git@") {
            return Self::Git(s.to_string());
        }

        Self::FileSystem(PathBuf::from(s))
    }
}

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    /// Makes the template available locally and returns its root.
    fn load(&self) -> Result<PathBuf>;
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// # Errors
    /// * `Error::TemplateDoesNotExistsError` if the path doesn't exist
    fn load(&self) -> Result<PathBuf> {
        let path = self.path.as_ref();
        if !path.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }

        Ok(path.to_path_buf())
    }
}

/// Loader for templates from git repositories.
pub struct GitLoader<'a, S: AsRef<str>> {
    prompt: &'a dyn Prompter,
    repo: S,
    skip_overwrite_check: bool,
}

impl<'a, S: AsRef<str>> GitLoader<'a, S> {
    pub fn new(prompt: &'a dyn Prompter, repo: S, skip_overwrite_check: bool) -> Self {
        Self { prompt, repo, skip_overwrite_check }
    }

    /// Directory name the repository is cloned into.
    pub fn clone_dir_name(repo_url: &str) -> &str {
        repo_url
            .trim_end_matches('/')
            .rsplit(['/', ':'])
            .next()
            .map(|name| name.trim_end_matches(".git"))
            .filter(|name| !name.is_empty())
            .unwrap_or("template")
    }
}

impl<S: AsRef<str>> TemplateLoader for GitLoader<'_, S> {
    /// Clones the repository into a directory named after it.
    ///
    /// # Errors
    /// * `Error::Git2Error` if the clone fails
    fn load(&self) -> Result<PathBuf> {
        let repo_url = self.repo.as_ref();
        let repo_name = Self::clone_dir_name(repo_url);
        let clone_path = PathBuf::from(repo_name);

        if clone_path.exists() {
            let response = self.prompt.confirm(
                self.skip_overwrite_check,
                format!("Directory '{repo_name}' already exists. Replace it?"),
            )?;
            if response {
                fs::remove_dir_all(&clone_path)?;
            } else {
                debug!("Using existing directory '{}'.", clone_path.display());
                return Ok(clone_path);
            }
        }

        debug!("Cloning repository '{}' to '{}'.", repo_url, clone_path.display());

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, _allowed_types| {
            let home = std::env::var("HOME").unwrap_or_default();
            git2::Cred::ssh_key(
                username_from_url.unwrap_or("git"),
                None,
                &Path::new(&home).join(".ssh").join("id_rsa"),
                None,
            )
        });

        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);
        builder.clone(repo_url, &clone_path)?;

        Ok(clone_path)
    }
}

/// Returns the template directory for the given template argument.
pub fn load_template<S: AsRef<str>>(
    prompt: &dyn Prompter,
    template: S,
    skip_overwrite_check: bool,
) -> Result<PathBuf> {
    let template_source = TemplateSource::from_string(template.as_ref());

    println!("Using template from the {template_source}");

    let loader: Box<dyn TemplateLoader + '_> = match template_source {
        TemplateSource::Git(repo) => Box::new(GitLoader::new(prompt, repo, skip_overwrite_check)),
        TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(path)),
    };

    loader.load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_source_display() {
        let fs_source = TemplateSource::FileSystem(PathBuf::from("/path/to/template"));
        assert_eq!(format!("{fs_source}"), "local path: '/path/to/template'");

        let git_source = TemplateSource::Git("git@github.com:user/repo".to_string());
        assert_eq!(format!("{git_source}"), "git repository: 'git@github.com:user/repo'");
    }

    #[test]
    fn test_template_source_from_string() {
        assert_eq!(
            TemplateSource::from_string("https://github.com/user/repo.git"),
            TemplateSource::Git("https://github.com/user/repo.git".into())
        );
        assert_eq!(
            TemplateSource::from_string("git@github.com:user/repo.git"),
            TemplateSource::Git("git@github.com:user/repo.git".into())
        );
        assert_eq!(
            TemplateSource::from_string("./local/path"),
            TemplateSource::FileSystem(PathBuf::from("./local/path"))
        );
    }

    #[test]
    fn test_clone_dir_name() {
        type Loader<'a> = GitLoader<'a, &'a str>;
        assert_eq!(Loader::clone_dir_name("https://github.com/user/fullstack.git"), "fullstack");
        assert_eq!(Loader::clone_dir_name("git@github.com:user/fullstack.git"), "fullstack");
        assert_eq!(Loader::clone_dir_name("https://github.com/user/fullstack/"), "fullstack");
    }

    #[test]
    fn test_local_loader() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let loaded = LocalLoader::new(temp_dir.path()).load().unwrap();
        assert_eq!(loaded, temp_dir.path());

        let missing = temp_dir.path().join("missing");
        assert!(matches!(
            LocalLoader::new(&missing).load(),
            Err(Error::TemplateDoesNotExistsError { .. })
        ));
    }
}
