//! Template materialization.
//! Walks the project template directory, renders every path with the
//! answers and writes the result under the output directory.

use globset::GlobSet;
use log::debug;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

/// What to do with one template entry.
#[derive(Debug, PartialEq)]
pub enum FileOperation {
    CreateDir { target: PathBuf },
    Copy { target: PathBuf },
    Write { target: PathBuf, content: String },
}

/// Fails when `output_dir` exists and `force` is not set.
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// `name.ext.j2` is a template; `name.j2` and `name.j2txt` are not.
pub fn is_jinja_template(filename: &str) -> bool {
    let parts: Vec<&str> = filename.split('.').collect();
    parts.len() > 2 && parts.last() == Some(&"j2")
}

/// Rendered paths must be relative, non-empty and free of empty components.
pub fn is_rendered_path_valid(rendered: &str) -> bool {
    let trimmed = rendered.trim();
    !trimmed.is_empty()
        && !trimmed.starts_with('/')
        && !trimmed.contains("//")
        && !trimmed.ends_with('/')
        && Path::new(trimmed).components().all(|c| matches!(c, Component::Normal(_)))
}

/// Maps a rendered relative path to its target, stripping `.j2` when present.
///
/// Returns the target path and whether the content must be rendered.
pub fn resolve_target_path<P: AsRef<Path>>(rendered: &str, target_dir: P) -> (PathBuf, bool) {
    let target_dir = target_dir.as_ref();
    let rendered_path = Path::new(rendered);

    match rendered_path.file_name().and_then(|n| n.to_str()) {
        Some(filename) if is_jinja_template(filename) => {
            let stripped = &filename[..filename.len() - ".j2".len()];
            (target_dir.join(rendered_path.with_file_name(stripped)), true)
        }
        _ => (target_dir.join(rendered_path), false),
    }
}

/// Locates the single top-level directory holding the project template.
pub fn find_project_template<P: AsRef<Path>>(template_root: P) -> Result<PathBuf> {
    let template_root = template_root.as_ref();
    let mut candidates = Vec::new();

    for entry in fs::read_dir(template_root)? {
        let entry = entry?;
        let name = entry.file_name();
        if entry.file_type()?.is_dir() && name.to_string_lossy().contains("{{") {
            candidates.push(entry.path());
        }
    }

    match candidates.len() {
        1 => Ok(candidates.remove(0)),
        0 => Err(Error::TemplateError(format!(
            "no project directory (a name containing '{{{{') found in '{}'",
            template_root.display()
        ))),
        n => Err(Error::TemplateError(format!(
            "{n} project directories found in '{}', expected exactly one",
            template_root.display()
        ))),
    }
}

pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    project_template: &'a Path,
    project_root: &'a Path,
    context: &'a serde_json::Value,
    ignored: &'a GlobSet,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        project_template: &'a Path,
        project_root: &'a Path,
        context: &'a serde_json::Value,
        ignored: &'a GlobSet,
    ) -> Self {
        Self { engine, project_template, project_root, context, ignored }
    }

    /// Decides what happens to one template entry. `None` means skip.
    pub fn process(&self, source: &Path) -> Result<Option<FileOperation>> {
        let relative = source
            .strip_prefix(self.project_template)
            .map_err(|e| Error::TemplateError(e.to_string()))?;
        let relative = relative
            .to_str()
            .ok_or_else(|| Error::TemplateError(format!("non UTF-8 path '{}'", source.display())))?;

        if relative.is_empty() {
            return Ok(Some(FileOperation::CreateDir { target: self.project_root.to_path_buf() }));
        }

        if self.ignored.is_match(relative) {
            debug!("Skipping '{relative}' (ignored)");
            return Ok(None);
        }

        let rendered = self.engine.render(relative, self.context)?;
        if !is_rendered_path_valid(&rendered) {
            debug!("Skipping '{relative}': rendered path '{rendered}' is empty or invalid");
            return Ok(None);
        }

        if source.is_dir() {
            let target = self.project_root.join(rendered.trim());
            return Ok(Some(FileOperation::CreateDir { target }));
        }

        let (target, render_content) = resolve_target_path(rendered.trim(), self.project_root);
        if render_content {
            let content = fs::read_to_string(source)?;
            let content = self.engine.render(&content, self.context)?;
            Ok(Some(FileOperation::Write { target, content }))
        } else {
            Ok(Some(FileOperation::Copy { target }))
        }
    }

    fn apply(&self, source: &Path, operation: FileOperation) -> Result<()> {
        match operation {
            FileOperation::CreateDir { target } => fs::create_dir_all(target)?,
            FileOperation::Copy { target } => {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                debug!("Copying '{}' to '{}'", source.display(), target.display());
                fs::copy(source, target)?;
            }
            FileOperation::Write { target, content } => {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                debug!("Writing '{}'", target.display());
                fs::write(target, content)?;
            }
        }
        Ok(())
    }

    /// Materializes the whole project template. Entries below a skipped
    /// directory are skipped with it.
    pub fn run(&self) -> Result<()> {
        let mut walker = WalkDir::new(self.project_template).sort_by_file_name().into_iter();

        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
            match self.process(entry.path())? {
                Some(operation) => self.apply(entry.path(), operation)?,
                None if entry.file_type().is_dir() => walker.skip_current_dir(),
                None => {}
            }
        }
        Ok(())
    }
}

/// Expands the project template under `output_dir` and returns the project root.
///
/// # Errors
/// * `Error::TemplateError` if the project directory name renders to nothing
/// * `Error::OutputDirectoryExistsError` if the project root exists and `force` is false
pub fn materialize(
    engine: &dyn TemplateRenderer,
    template_root: &Path,
    output_dir: &Path,
    context: &serde_json::Value,
    ignored: &GlobSet,
    force: bool,
) -> Result<PathBuf> {
    let project_template = find_project_template(template_root)?;
    let dir_name = project_template
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::TemplateError("invalid project directory name".into()))?;

    let rendered_name = engine.render(dir_name, context)?;
    if !is_rendered_path_valid(&rendered_name) || rendered_name.contains('/') {
        return Err(Error::TemplateError(format!(
            "project directory '{dir_name}' rendered to invalid name '{rendered_name}'"
        )));
    }

    let project_root = ensure_output_dir(output_dir.join(rendered_name.trim()), force)?;
    debug!("Materializing '{}' into '{}'", project_template.display(), project_root.display());

    Processor::new(engine, &project_template, &project_root, context, ignored).run()?;
    Ok(project_root)
}
