//! Human-oriented rendering of display objects

use colored::Colorize;

use crate::models::{DisplayKind, DisplayObject};

/// Render a display object as coloured, indented text.
///
/// # Example output
/// ```text
/// ✓ alert-success (reset: alerts)
///   Saved
/// ```
pub fn format_display_object(obj: &DisplayObject) -> String {
    let marker = match obj.display_kind() {
        Some(DisplayKind::AlertSuccess) => "✓".green(),
        Some(DisplayKind::AlertError) => "✗".red(),
        Some(DisplayKind::AlertWarning) => "⚠".yellow(),
        Some(DisplayKind::AlertInformation) => "ℹ".cyan(),
        Some(DisplayKind::Card) => "▭".normal(),
        None => "•".dimmed(),
    };

    let reset = match obj.reset.as_deref() {
        Some(scope) => format!("(reset: {})", scope),
        None => "(no reset)".to_string(),
    };

    let mut out = format!("{} {} {}", marker, obj.kind.bold(), reset.dimmed());

    if let Some(id) = obj.id.as_deref() {
        out.push_str(&format!("\n  id: {}", id.cyan()));
    }
    if let Some(position) = obj.position {
        out.push_str(&format!("\n  position: {}", position));
    }

    for line in obj.content.lines() {
        out.push_str("\n  ");
        out.push_str(line);
    }

    out
}
