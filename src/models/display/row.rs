//! Table row for display objects

use serde::Serialize;
use tabled::Tabled;

use super::DisplayObject;

/// Display object flattened for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DisplayRow {
    #[tabled(rename = "TYPE")]
    pub kind: String,

    #[tabled(rename = "CONTENT")]
    pub content: String,

    #[tabled(rename = "RESET")]
    pub reset: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "POSITION")]
    pub position: String,
}

impl From<&DisplayObject> for DisplayRow {
    fn from(obj: &DisplayObject) -> Self {
        Self {
            kind: obj.kind.clone(),
            content: obj.content.clone(),
            reset: obj.reset.clone().unwrap_or_else(|| "--".to_string()),
            id: obj.id.clone().unwrap_or_else(|| "--".to_string()),
            position: obj
                .position
                .map(|p| p.to_string())
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}

impl From<DisplayObject> for DisplayRow {
    fn from(obj: DisplayObject) -> Self {
        DisplayRow::from(&obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::display::Position;

    #[test]
    fn test_row_from_success() {
        let row = DisplayRow::from(DisplayObject::success("Saved"));

        assert_eq!(row.kind, "alert-success");
        assert_eq!(row.content, "Saved");
        assert_eq!(row.reset, "alerts");
        assert_eq!(row.id, "--");
        assert_eq!(row.position, "--");
    }

    #[test]
    fn test_row_from_card() {
        let card = DisplayObject::card("Body")
            .with_id("c1")
            .with_position(Position::Bottom);
        let row = DisplayRow::from(&card);

        assert_eq!(row.reset, "--");
        assert_eq!(row.id, "c1");
        assert_eq!(row.position, "bottom");
    }
}
