//! displaykit - display-update payloads and template includes
//!
//! Builds the small `{type, content, reset}` records a client-side renderer
//! applies to a server-rendered page, and reads static HTML fragments for
//! inline embedding.
//!
//! ```
//! use displaykit::{DisplayObject, MemoryTemplateStore, include};
//!
//! let alert = DisplayObject::success("Saved");
//! assert_eq!(alert.reset.as_deref(), Some("alerts"));
//!
//! let store = MemoryTemplateStore::new().with_template("footer", "<footer/>");
//! assert_eq!(include(&store, "footer").unwrap(), "<footer/>");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod templates;

pub use error::{Error, Result, TemplateError};
pub use models::{DisplayKind, DisplayObject, Position, ResetScope};
pub use templates::{FileTemplateStore, MemoryTemplateStore, TemplateStore, include};
