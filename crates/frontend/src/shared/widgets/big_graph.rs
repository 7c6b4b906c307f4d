use crate::shared::components::table::format_axis_value;
use contracts::shared::widgets::{BigGraphWidgetParams, GraphPoint, GraphSeries, WidgetSize};
use leptos::prelude::*;

/// SVG viewBox width; the chart stretches to its container horizontally.
const CHART_WIDTH: f64 = 600.0;
const CHART_PADDING: f64 = 12.0;

const SERIES_COLORS: [&str; 5] = [
    "var(--color-primary)",
    "#e5484d",
    "#30a46c",
    "#f5a524",
    "#8e4ec6",
];

fn series_color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// Min/max over all finite values of all series; `None` when there are none.
pub fn value_range(series: &[GraphSeries]) -> Option<ValueRange> {
    series
        .iter()
        .flat_map(|s| &s.points)
        .map(|p| p.value)
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some(ValueRange { min: v, max: v }),
            Some(r) => Some(ValueRange {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
}

/// `points` attribute of an SVG polyline scaled into `width` x `height`.
///
/// Larger values are drawn higher. A flat range is drawn through the middle
/// and a single point is centered horizontally. Non-finite values are skipped
/// but keep their x slot.
pub fn polyline_points(points: &[GraphPoint], range: ValueRange, width: f64, height: f64) -> String {
    let inner_width = width - 2.0 * CHART_PADDING;
    let inner_height = height - 2.0 * CHART_PADDING;
    let span = range.max - range.min;
    let step = if points.len() > 1 {
        inner_width / (points.len() - 1) as f64
    } else {
        0.0
    };

    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.value.is_finite())
        .map(|(i, p)| {
            let x = if points.len() > 1 {
                CHART_PADDING + step * i as f64
            } else {
                width / 2.0
            };
            let y = if span > 0.0 {
                CHART_PADDING + inner_height * (1.0 - (p.value - range.min) / span)
            } else {
                height / 2.0
            };
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line chart for a big graph payload
#[component]
pub fn BigGraphWidgetContent(
    params: BigGraphWidgetParams,
    /// Dashboard slot; only the chart height depends on it
    widget_size: WidgetSize,
) -> impl IntoView {
    let height = widget_size.chart_height() as f64;
    let title = params
        .title
        .clone()
        .map(|t| view! { <div class="big-graph__title">{t}</div> });

    let Some(range) = value_range(&params.series) else {
        return view! {
            <div class="big-graph big-graph--empty">
                {title}
                <span class="big-graph__empty">"No data"</span>
            </div>
        }
        .into_any();
    };

    let unit = params.unit.as_deref();
    let max_label = format_axis_value(range.max, unit);
    let min_label = format_axis_value(range.min, unit);

    let (first_label, last_label) = params
        .series
        .first()
        .map(|s| {
            (
                s.points.first().map(|p| p.label.clone()).unwrap_or_default(),
                s.points.last().map(|p| p.label.clone()).unwrap_or_default(),
            )
        })
        .unwrap_or_default();

    let lines = params
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let points = polyline_points(&s.points, range, CHART_WIDTH, height);
            view! {
                <polyline points=points fill="none" stroke=series_color(i) stroke-width="2" />
            }
        })
        .collect_view();

    let legend = params
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let swatch = format!("background: {};", series_color(i));
            view! {
                <span class="big-graph__legend-item">
                    <span class="big-graph__swatch" style=swatch></span>
                    {s.name.clone()}
                </span>
            }
        })
        .collect_view();

    let view_box = format!("0 0 {} {}", CHART_WIDTH, height);

    view! {
        <div class="big-graph">
            {title}
            <div class="big-graph__chart">
                <div class="big-graph__axis">
                    <span>{max_label}</span>
                    <span>{min_label}</span>
                </div>
                <svg
                    class="big-graph__svg"
                    viewBox=view_box
                    preserveAspectRatio="none"
                    width="100%"
                    height=height.to_string()
                >
                    {lines}
                </svg>
            </div>
            <div class="big-graph__labels">
                <span>{first_label}</span>
                <span>{last_label}</span>
            </div>
            <div class="big-graph__legend">{legend}</div>
        </div>
    }
    .into_any()
}
