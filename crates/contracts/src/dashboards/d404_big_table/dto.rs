use crate::shared::widgets::InsightRecord;
use serde::{Deserialize, Serialize};

/// One renderable unit of a table row's details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailsPart {
    /// Identifier passed to the graph/widget data endpoints
    pub id: String,
    /// Tab label when the row has several parts
    pub title: String,
    /// Raw content type tag ("graph", "widget", ...). Absent means graph.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub part_type: Option<String>,
}

/// Details payload attached to one row of the big table widget
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BigTableRowDetails {
    pub parts: Vec<DetailsPart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<Vec<InsightRecord>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigTableRow {
    pub cells: Vec<String>,
    /// Rows without details are rendered flat (not expandable)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BigTableRowDetails>,
}

/// Payload for the big table widget.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BigTableWidgetParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<BigTableRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_details_part_without_type() {
        let part: DetailsPart = serde_json::from_value(json!({"id": "p1", "title": "Main"})).unwrap();
        assert_eq!(part.id, "p1");
        assert_eq!(part.part_type, None);

        // absent type stays absent on the wire
        let value = serde_json::to_value(&part).unwrap();
        assert!(value.get("type").is_none());
    }

    #[test]
    fn test_details_part_type_field_name() {
        let part: DetailsPart =
            serde_json::from_value(json!({"id": "b", "title": "B", "type": "widget"})).unwrap();
        assert_eq!(part.part_type.as_deref(), Some("widget"));
    }

    #[test]
    fn test_row_details_insights_optional() {
        let details: BigTableRowDetails =
            serde_json::from_value(json!({"parts": [{"id": "p1", "title": "Main"}]})).unwrap();
        assert_eq!(details.parts.len(), 1);
        assert!(details.insights.is_none());

        let details: BigTableRowDetails = serde_json::from_value(json!({
            "parts": [{"id": "p1", "title": "Main"}],
            "insights": [{"title": "Drop", "text": "Orders fell 12%", "level": "warning"}]
        }))
        .unwrap();
        assert_eq!(details.insights.map(|i| i.len()), Some(1));
    }

    #[test]
    fn test_big_table_row_without_details() {
        let params: BigTableWidgetParams = serde_json::from_value(json!({
            "columns": ["Item", "Qty"],
            "rows": [{"cells": ["Socks", "12"]}]
        }))
        .unwrap();
        assert_eq!(params.title, None);
        assert!(params.rows[0].details.is_none());
    }
}
