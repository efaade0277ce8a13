//! Filesystem-backed template store
//!
//! Templates are static HTML files under a root directory. A name without an
//! extension resolves to `<name>.html`, so `include("sidebar")` reads
//! `<root>/sidebar.html`.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::{DEFAULT_EXTENSION, TemplateStore};
use crate::error::TemplateError;

/// Reads templates from files below a root directory.
#[derive(Debug, Clone)]
pub struct FileTemplateStore {
    root: PathBuf,
}

impl FileTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Template root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a template name to its file path.
    ///
    /// Names must be relative and may not step outside the root.
    pub fn resolve(&self, filename: &str) -> Result<PathBuf, TemplateError> {
        let invalid = || TemplateError::InvalidName(filename.to_string());
        if filename.trim().is_empty() {
            return Err(invalid());
        }

        let mut relative = PathBuf::new();
        for component in Path::new(filename).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                _ => return Err(invalid()),
            }
        }
        // A name made only of `.` would otherwise resolve to the root itself
        if relative.file_name().is_none() {
            return Err(invalid());
        }

        let mut path = self.root.join(&relative);
        if path.extension().is_none() {
            path.set_extension(DEFAULT_EXTENSION);
        }
        if !path.starts_with(&self.root) || path == self.root {
            return Err(invalid());
        }
        Ok(path)
    }

    /// Names of the templates directly under the root, sorted.
    ///
    /// A missing root yields an empty list.
    pub fn list(&self) -> Result<Vec<String>, TemplateError> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(TemplateError::Render {
                    name: self.root.display().to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|e| e.to_str()) == Some(DEFAULT_EXTENSION)
            })
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(String::from))
            .collect();
        names.sort();
        Ok(names)
    }
}

impl TemplateStore for FileTemplateStore {
    fn render(&self, filename: &str) -> Result<String, TemplateError> {
        let path = self.resolve(filename)?;
        log::debug!("Reading template {} from {}", filename, path.display());

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(TemplateError::NotFound(filename.to_string()))
            }
            Err(e) => {
                log::warn!("Failed to read template {}: {}", path.display(), e);
                Err(TemplateError::Render {
                    name: filename.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }
}
