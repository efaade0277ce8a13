//! Template includes
//!
//! HTML fragments are looked up by filename through a [`TemplateStore`] and
//! embedded verbatim into an enclosing page.

mod file;
mod memory;

pub use file::FileTemplateStore;
pub use memory::MemoryTemplateStore;

use crate::error::TemplateError;

/// Extension assumed when a template name has none
pub const DEFAULT_EXTENSION: &str = "html";

/// Source of rendered template content.
pub trait TemplateStore: Send + Sync {
    /// Render the named template to a string.
    fn render(&self, filename: &str) -> Result<String, TemplateError>;
}

impl<S: TemplateStore + ?Sized> TemplateStore for &S {
    fn render(&self, filename: &str) -> Result<String, TemplateError> {
        (**self).render(filename)
    }
}

impl<S: TemplateStore + ?Sized> TemplateStore for Box<S> {
    fn render(&self, filename: &str) -> Result<String, TemplateError> {
        (**self).render(filename)
    }
}

/// Return the rendered content of `filename` for inline embedding.
///
/// Store errors are returned unchanged.
pub fn include<S: TemplateStore + ?Sized>(store: &S, filename: &str) -> Result<String, TemplateError> {
    log::debug!("Including template {}", filename);
    store.render(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_returns_store_content() {
        let store = MemoryTemplateStore::new().with_template("header", "<header>Hi</header>");

        assert_eq!(include(&store, "header").unwrap(), "<header>Hi</header>");
    }

    #[test]
    fn test_include_propagates_not_found() {
        let store = MemoryTemplateStore::new();

        match include(&store, "missing") {
            Err(TemplateError::NotFound(name)) => assert_eq!(name, "missing"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_include_through_trait_object() {
        let store: Box<dyn TemplateStore> =
            Box::new(MemoryTemplateStore::new().with_template("nav", "<nav/>"));

        assert_eq!(include(&store, "nav").unwrap(), "<nav/>");
        assert_eq!(include(store.as_ref(), "nav").unwrap(), "<nav/>");
    }

    #[test]
    fn test_include_is_repeatable() {
        let store = MemoryTemplateStore::new().with_template("footer", "<footer/>");

        let first = include(&store, "footer").unwrap();
        let second = include(&store, "footer").unwrap();
        assert_eq!(first, second);
    }
}
