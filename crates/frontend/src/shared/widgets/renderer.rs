use super::{BigGraphWidgetContent, BigTableWidgetContent, InsightBlock, NotImplementedWidgetContent};
use crate::shared::dashboard_context::DashboardContext;
use contracts::shared::widgets::{WidgetInfo, WidgetSize};
use leptos::prelude::*;

/// Renders a widget payload by its type.
///
/// `context` is only used by widgets that fetch nested content (big table
/// rows with details). `widget_size` is handed on to graph content.
pub fn render_widget(
    context: &DashboardContext,
    id: &str,
    info: WidgetInfo,
    widget_size: WidgetSize,
) -> AnyView {
    match info {
        WidgetInfo::BigGraph(params) => view! {
            <BigGraphWidgetContent params=params widget_size=widget_size />
        }
        .into_any(),
        WidgetInfo::BigTable(params) => view! {
            <BigTableWidgetContent params=params context=context.clone() widget_size=widget_size />
        }
        .into_any(),
        WidgetInfo::Insight(record) => view! { <InsightBlock data=record /> }.into_any(),
        WidgetInfo::Unsupported => {
            log::warn!("Widget '{}' has a type this client cannot render", id);
            view! { <NotImplementedWidgetContent /> }.into_any()
        }
    }
}
