//! Display object commands

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;
use crate::models::{DisplayObject, Position};
use crate::output::Formattable;

/// Print a success alert
pub fn success(opts: &GlobalOptions, content: &str) -> Result<()> {
    emit(opts, DisplayObject::success(content))
}

/// Print an error alert
pub fn error(opts: &GlobalOptions, content: &str) -> Result<()> {
    emit(opts, DisplayObject::error(content))
}

/// Print a warning alert
pub fn warning(opts: &GlobalOptions, content: &str) -> Result<()> {
    emit(opts, DisplayObject::warning(content))
}

/// Print an information alert
pub fn info(opts: &GlobalOptions, content: &str) -> Result<()> {
    emit(opts, DisplayObject::information(content))
}

/// Print a card with optional id, position and reset scope
pub fn card(
    opts: &GlobalOptions,
    content: &str,
    id: Option<&str>,
    position: Option<Position>,
    reset: Option<&str>,
) -> Result<()> {
    let mut card = DisplayObject::card(content);
    if let Some(id) = id {
        card = card.with_id(id);
    }
    if let Some(position) = position {
        card = card.with_position(position);
    }
    if let Some(reset) = reset {
        card = card.with_reset(reset);
    }
    emit(opts, card)
}

/// Print a display object of any kind
pub fn show(opts: &GlobalOptions, kind: &str, content: &str, reset: Option<&str>) -> Result<()> {
    emit(
        opts,
        DisplayObject::new(kind, content, reset.map(String::from)),
    )
}

fn emit(opts: &GlobalOptions, obj: DisplayObject) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if obj.display_kind().is_none() {
        debug!("Display kind {:?} is not a known kind", obj.kind);
    }
    debug!("Printing {} as {:?}", obj.kind, ctx.format);

    obj.print(ctx.format)
}
