//! Display models
//!
//! Value types handed to the client-side renderer, plus their table views.

pub mod display;

pub use display::{DisplayKind, DisplayObject, DisplayRow, Position, ResetScope};
