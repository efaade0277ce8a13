//! In-memory template store

use std::collections::HashMap;

use super::TemplateStore;
use crate::error::TemplateError;

/// Templates held in a map, keyed by exact filename.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    templates: HashMap<String, String>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a template, builder style
    pub fn with_template(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }

    /// Add or replace a template
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.templates.insert(name.into(), content.into());
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn render(&self, filename: &str) -> Result<String, TemplateError> {
        self.templates
            .get(filename)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound(filename.to_string()))
    }
}
