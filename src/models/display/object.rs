//! The display-update payload sent to the client renderer

use serde::{Deserialize, Serialize};

use super::kind::{DisplayKind, Position, ResetScope};

/// One UI update: an alert or a card, with an optional reset hint.
///
/// On the wire this is `{ "type", "content", "reset" }`, where `reset` is
/// always present and `null` when absent. Cards may also carry `id` and
/// `position`; both are left off the wire when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayObject {
    /// Display kind, e.g. `alert-success` or `card`
    #[serde(rename = "type")]
    pub kind: String,

    /// Plain text or HTML, shown as-is by the client
    pub content: String,

    /// Prior state to clear before rendering (`alerts`, `cards`, `both`)
    #[serde(default)]
    pub reset: Option<String>,

    /// Card id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Card placement relative to existing cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl DisplayObject {
    /// Build a display object from its three core fields.
    ///
    /// `reset` is stored exactly as given; `None` means no reset. The kind is
    /// not checked against [`DisplayKind`].
    pub fn new(kind: impl Into<String>, content: impl Into<String>, reset: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into(),
            reset,
            id: None,
            position: None,
        }
    }

    /// A success alert that clears previous alerts.
    ///
    /// Rendered at the top of the display.
    pub fn success(content: impl Into<String>) -> Self {
        Self::alert(DisplayKind::AlertSuccess, content)
    }

    /// An error alert that clears previous alerts.
    ///
    /// Rendered at the top of the display.
    pub fn error(content: impl Into<String>) -> Self {
        Self::alert(DisplayKind::AlertError, content)
    }

    /// A warning alert that clears previous alerts.
    pub fn warning(content: impl Into<String>) -> Self {
        Self::alert(DisplayKind::AlertWarning, content)
    }

    /// An information alert that clears previous alerts.
    pub fn information(content: impl Into<String>) -> Self {
        Self::alert(DisplayKind::AlertInformation, content)
    }

    /// A card with no reset, id or position.
    pub fn card(content: impl Into<String>) -> Self {
        Self::new(DisplayKind::Card, content, None)
    }

    fn alert(kind: DisplayKind, content: impl Into<String>) -> Self {
        Self::new(kind, content, Some(ResetScope::Alerts.into()))
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_reset(mut self, scope: impl Into<String>) -> Self {
        self.reset = Some(scope.into());
        self
    }

    /// Known kind, if the stored kind is one of the documented values
    pub fn display_kind(&self) -> Option<DisplayKind> {
        self.kind.parse().ok()
    }

    /// Compact JSON for handing to the client
    pub fn to_payload(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
