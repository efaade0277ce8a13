//! Display objects: the payloads a client renderer applies to the page
//!
//! Alerts replace earlier alerts; cards accumulate unless a reset scope
//! says otherwise.

mod kind;
mod object;
mod row;

pub use kind::{DisplayKind, Position, ResetScope};
pub use object::DisplayObject;
pub use row::DisplayRow;
