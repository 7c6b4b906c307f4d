//! Built-in demo dashboard served when no data file is configured.
//!
//! Covers every details part kind: plain graph parts, an explicit
//! `"widget"` part, and a part type the client does not implement.

use chrono::{Duration, NaiveDate};
use contracts::dashboards::d404_big_table::{
    BigTableRow, BigTableRowDetails, BigTableWidgetParams, DetailsPart,
};
use contracts::shared::widgets::{
    BigGraphWidgetParams, GraphPoint, GraphSeries, InsightLevel, InsightRecord, WidgetInfo,
};
use std::collections::HashMap;

use super::store::DashboardData;

/// Big table widget the frontend opens by default
pub const MAIN_WIDGET_ID: &str = "sales_by_marketplace";

const DEMO_DAYS: i64 = 14;

/// Daily series with a deterministic saw-tooth around `base`
fn daily_series(name: &str, base: f64, step: f64) -> GraphSeries {
    let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap_or_default();
    let points = (0..DEMO_DAYS)
        .map(|day| GraphPoint {
            label: (start + Duration::days(day)).format("%Y-%m-%d").to_string(),
            value: base + ((day * 7) % 5) as f64 * step,
        })
        .collect();
    GraphSeries {
        name: name.to_string(),
        points,
    }
}

fn graph(title: &str, unit: &str, series: Vec<GraphSeries>) -> BigGraphWidgetParams {
    BigGraphWidgetParams {
        title: Some(title.to_string()),
        unit: Some(unit.to_string()),
        series,
    }
}

fn part(id: &str, title: &str, part_type: Option<&str>) -> DetailsPart {
    DetailsPart {
        id: id.to_string(),
        title: title.to_string(),
        part_type: part_type.map(str::to_string),
    }
}

fn insight(title: &str, text: &str, level: InsightLevel) -> InsightRecord {
    InsightRecord {
        title: title.to_string(),
        text: text.to_string(),
        level,
    }
}

fn row(cells: &[&str], details: Option<BigTableRowDetails>) -> BigTableRow {
    BigTableRow {
        cells: cells.iter().map(|c| c.to_string()).collect(),
        details,
    }
}

pub fn demo_data() -> DashboardData {
    let mut graphs = HashMap::new();
    graphs.insert(
        "revenue_wb".to_string(),
        graph("Revenue, WB", "₽", vec![daily_series("WB", 120_000.0, 9_500.0)]),
    );
    graphs.insert(
        "revenue_ozon".to_string(),
        graph("Revenue, OZON", "₽", vec![daily_series("OZON", 80_000.0, 7_000.0)]),
    );
    graphs.insert(
        "returns_by_marketplace".to_string(),
        graph(
            "Returns",
            "pcs",
            vec![
                daily_series("WB", 14.0, 3.0),
                daily_series("OZON", 9.0, 2.0),
            ],
        ),
    );

    let table = BigTableWidgetParams {
        title: Some("Sales by marketplace".to_string()),
        columns: vec![
            "Marketplace".to_string(),
            "Revenue".to_string(),
            "Returns".to_string(),
        ],
        rows: vec![
            row(
                &["WB", "1 946 000 ₽", "238"],
                Some(BigTableRowDetails {
                    parts: vec![part("revenue_wb", "Revenue", None)],
                    insights: Some(vec![insight(
                        "Weekend peaks",
                        "Revenue is highest on Saturdays.",
                        InsightLevel::Info,
                    )]),
                }),
            ),
            row(
                &["OZON", "1 316 000 ₽", "154"],
                Some(BigTableRowDetails {
                    parts: vec![
                        part("revenue_ozon", "Revenue", Some("graph")),
                        part("orders_summary", "Orders", Some("widget")),
                        part("ozon_timeline", "Timeline", Some("timeline")),
                    ],
                    insights: Some(vec![
                        insight(
                            "Returns growing",
                            "Returns rose 12% compared to the previous period.",
                            InsightLevel::Warning,
                        ),
                        insight(
                            "Stock",
                            "Two items are out of stock.",
                            InsightLevel::Critical,
                        ),
                    ]),
                }),
            ),
            row(&["YM", "214 000 ₽", "17"], None),
        ],
    };

    let mut widgets = HashMap::new();
    widgets.insert(MAIN_WIDGET_ID.to_string(), WidgetInfo::BigTable(table));
    widgets.insert(
        "orders_summary".to_string(),
        WidgetInfo::BigGraph(graph(
            "Orders",
            "pcs",
            vec![
                daily_series("WB", 310.0, 25.0),
                daily_series("OZON", 190.0, 18.0),
            ],
        )),
    );
    widgets.insert(
        "returns_note".to_string(),
        WidgetInfo::Insight(insight(
            "Returns",
            "Return rate is within the usual range.",
            InsightLevel::Success,
        )),
    );

    DashboardData { graphs, widgets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d404_big_table::DashboardStore;

    #[test]
    fn test_daily_series_labels() {
        let series = daily_series("WB", 10.0, 1.0);
        assert_eq!(series.points.len(), DEMO_DAYS as usize);
        assert_eq!(series.points[0].label, "2024-05-01");
        assert_eq!(series.points[13].label, "2024-05-14");
        assert!(series.points.iter().all(|p| p.value >= 10.0 && p.value <= 14.0));
    }

    #[test]
    fn test_every_details_part_resolves() {
        let store = DashboardStore::demo();
        let Ok(WidgetInfo::BigTable(table)) = store.widget(MAIN_WIDGET_ID) else {
            panic!("main widget must be a big table");
        };

        for details in table.rows.iter().filter_map(|r| r.details.as_ref()) {
            for part in &details.parts {
                match part.part_type.as_deref() {
                    None | Some("graph") => assert!(store.graph(&part.id).is_ok(), "{}", part.id),
                    Some("widget") => assert!(store.widget(&part.id).is_ok(), "{}", part.id),
                    Some(_) => {}
                }
            }
        }
    }

    #[test]
    fn test_demo_round_trips_through_json() {
        let json = serde_json::to_string(&demo_data()).unwrap();
        let store = DashboardStore::from_json(&json).unwrap();
        assert!(store.graph("revenue_wb").is_ok());
        assert!(store.widget("orders_summary").is_ok());
    }
}
