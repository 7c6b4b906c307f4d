use crate::dashboards::d404_big_table::BigTableWidgetParams;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Sizing
// ---------------------------------------------------------------------------

/// Size slot a widget occupies on the dashboard grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl WidgetSize {
    /// Chart viewport height in pixels for this slot.
    pub fn chart_height(self) -> u32 {
        match self {
            WidgetSize::Small => 160,
            WidgetSize::Medium => 240,
            WidgetSize::Large => 360,
        }
    }
}

impl FromStr for WidgetSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(WidgetSize::Small),
            "medium" => Ok(WidgetSize::Medium),
            "large" => Ok(WidgetSize::Large),
            other => Err(format!("Unknown widget size: {}", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Big graph
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    /// Axis label, usually a date ("2024-05-01")
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSeries {
    pub name: String,
    pub points: Vec<GraphPoint>,
}

/// Payload for the big graph widget and for graph parts of table row details.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BigGraphWidgetParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Unit appended to axis values (e.g. "₽", "%")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default)]
    pub series: Vec<GraphSeries>,
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightLevel {
    #[default]
    Info,
    Success,
    Warning,
    Critical,
}

/// Short annotation shown under widget content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRecord {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub level: InsightLevel,
}

// ---------------------------------------------------------------------------
// Generic widget payload
// ---------------------------------------------------------------------------

/// Widget payload returned by the widget endpoint.
///
/// Wire format: `{"type": "bigGraph", ...params}`. Types this client does
/// not know deserialize to [`WidgetInfo::Unsupported`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WidgetInfo {
    BigGraph(BigGraphWidgetParams),
    BigTable(BigTableWidgetParams),
    Insight(InsightRecord),
    #[serde(other)]
    Unsupported,
}

impl WidgetInfo {
    /// Wire name of the widget type
    pub fn type_name(&self) -> &'static str {
        match self {
            WidgetInfo::BigGraph(_) => "bigGraph",
            WidgetInfo::BigTable(_) => "bigTable",
            WidgetInfo::Insight(_) => "insight",
            WidgetInfo::Unsupported => "unsupported",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_widget_size_wire_names() {
        let size: WidgetSize = serde_json::from_value(json!("large")).unwrap();
        assert_eq!(size, WidgetSize::Large);
        assert_eq!(serde_json::to_value(WidgetSize::Small).unwrap(), json!("small"));
        assert_eq!(WidgetSize::default(), WidgetSize::Medium);
    }

    #[test]
    fn test_widget_size_from_str() {
        assert_eq!("small".parse::<WidgetSize>(), Ok(WidgetSize::Small));
        assert_eq!("large".parse::<WidgetSize>(), Ok(WidgetSize::Large));
        assert!("huge".parse::<WidgetSize>().is_err());
    }

    #[test]
    fn test_chart_height_grows_with_size() {
        assert!(WidgetSize::Small.chart_height() < WidgetSize::Medium.chart_height());
        assert!(WidgetSize::Medium.chart_height() < WidgetSize::Large.chart_height());
    }

    #[test]
    fn test_widget_info_big_graph() {
        let info: WidgetInfo = serde_json::from_value(json!({
            "type": "bigGraph",
            "title": "Revenue",
            "series": [{"name": "WB", "points": [{"label": "2024-05-01", "value": 10.5}]}]
        }))
        .unwrap();

        match info {
            WidgetInfo::BigGraph(params) => {
                assert_eq!(params.title.as_deref(), Some("Revenue"));
                assert_eq!(params.unit, None);
                assert_eq!(params.series[0].points[0].value, 10.5);
            }
            other => panic!("unexpected widget: {:?}", other),
        }
    }

    #[test]
    fn test_widget_info_unknown_type_is_unsupported() {
        let info: WidgetInfo =
            serde_json::from_value(json!({"type": "heatmap", "cells": []})).unwrap();
        assert_eq!(info, WidgetInfo::Unsupported);
        assert_eq!(info.type_name(), "unsupported");
    }

    #[test]
    fn test_insight_level_defaults_to_info() {
        let record: InsightRecord =
            serde_json::from_value(json!({"title": "Note", "text": "Sales are flat"})).unwrap();
        assert_eq!(record.level, InsightLevel::Info);
    }
}
