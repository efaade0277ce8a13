//! Display vocabulary: kinds, reset scopes and card positions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The display kinds understood by the client-side renderer.
///
/// `DisplayObject` stores its kind as a plain string and never checks it
/// against this list; these values exist so callers can avoid typos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayKind {
    AlertSuccess,
    AlertWarning,
    AlertError,
    AlertInformation,
    Card,
}

impl DisplayKind {
    /// All known kinds, in documentation order
    pub const ALL: [DisplayKind; 5] = [
        DisplayKind::AlertSuccess,
        DisplayKind::AlertWarning,
        DisplayKind::AlertError,
        DisplayKind::AlertInformation,
        DisplayKind::Card,
    ];

    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayKind::AlertSuccess => "alert-success",
            DisplayKind::AlertWarning => "alert-warning",
            DisplayKind::AlertError => "alert-error",
            DisplayKind::AlertInformation => "alert-information",
            DisplayKind::Card => "card",
        }
    }

    /// Whether this kind is one of the `alert-*` kinds
    pub fn is_alert(&self) -> bool {
        !matches!(self, DisplayKind::Card)
    }
}

impl fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DisplayKind> for String {
    fn from(kind: DisplayKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for DisplayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisplayKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown display kind: {s}"))
    }
}

/// What prior display state the client clears before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetScope {
    Alerts,
    Cards,
    Both,
}

impl ResetScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResetScope::Alerts => "alerts",
            ResetScope::Cards => "cards",
            ResetScope::Both => "both",
        }
    }
}

impl fmt::Display for ResetScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ResetScope> for String {
    fn from(scope: ResetScope) -> Self {
        scope.as_str().to_string()
    }
}

/// Where a card is inserted relative to existing cards.
///
/// The client places cards at the bottom when no position is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Bottom,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_kind_wire_names() {
        let names: Vec<&str> = DisplayKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "alert-success",
                "alert-warning",
                "alert-error",
                "alert-information",
                "card"
            ]
        );
    }

    #[test]
    fn test_display_kind_from_str() {
        assert_eq!(
            "alert-error".parse::<DisplayKind>(),
            Ok(DisplayKind::AlertError)
        );
        assert_eq!("card".parse::<DisplayKind>(), Ok(DisplayKind::Card));
        assert!("alert-fatal".parse::<DisplayKind>().is_err());
    }

    #[test]
    fn test_display_kind_is_alert() {
        assert!(DisplayKind::AlertInformation.is_alert());
        assert!(!DisplayKind::Card.is_alert());
    }

    #[test]
    fn test_reset_scope_names() {
        assert_eq!(ResetScope::Alerts.to_string(), "alerts");
        assert_eq!(ResetScope::Cards.to_string(), "cards");
        assert_eq!(String::from(ResetScope::Both), "both");
    }

    #[test]
    fn test_position_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Position::Top).unwrap(), "\"top\"");
        let parsed: Position = serde_json::from_str("\"bottom\"").unwrap();
        assert_eq!(parsed, Position::Bottom);
    }
}
