use crate::dashboards::BigTableDashboard;
use crate::shared::dashboard_context::DashboardContext;
use contracts::shared::widgets::WidgetSize;
use leptos::prelude::*;
use serde::Deserialize;

/// Widget shown when the page URL has no `?widget=` parameter
const DEFAULT_WIDGET_ID: &str = "sales_by_marketplace";

/// Page URL query: `?widget=<id>&size=<small|medium|large>`
#[derive(Debug, Default, PartialEq, Deserialize)]
struct DashboardQuery {
    widget: Option<String>,
    size: Option<String>,
}

impl DashboardQuery {
    fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_else(|e| {
            log::warn!("Invalid page query '{}': {}", search, e);
            Self::default()
        })
    }

    fn widget_id(&self) -> String {
        self.widget
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| DEFAULT_WIDGET_ID.to_string())
    }

    fn widget_size(&self) -> WidgetSize {
        match self.size.as_deref().map(str::parse::<WidgetSize>) {
            Some(Ok(size)) => size,
            Some(Err(e)) => {
                log::warn!("{}, using default", e);
                WidgetSize::default()
            }
            None => WidgetSize::default(),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // The data context is created once and handed down explicitly.
    let context = DashboardContext::http();

    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let query = DashboardQuery::parse(&search);
    let widget_id = query.widget_id();
    let widget_size = query.widget_size();

    log::debug!(
        "Opening big table dashboard for widget '{}' ({:?})",
        widget_id,
        widget_size
    );

    view! {
        <BigTableDashboard context=context widget_id=widget_id widget_size=widget_size />
    }
}
