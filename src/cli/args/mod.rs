//! Shared CLI argument types

mod common;
mod global;

pub use common::{CardPosition, OutputFormat};
pub use global::GlobalOptions;
