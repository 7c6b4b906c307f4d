use super::plan::{DetailsBody, DetailsPlan, PartRequest};
use crate::shared::components::{AutoTab, AutoTabs, LoadableView};
use crate::shared::dashboard_context::{ApiFuture, DashboardContext};
use crate::shared::widgets::{
    render_widget, BigGraphWidgetContent, InsightBlock, NotImplementedWidgetContent,
};
use contracts::dashboards::d404_big_table::{BigTableRowDetails, DetailsPart};
use contracts::shared::widgets::{BigGraphWidgetParams, WidgetInfo, WidgetSize};
use leptos::prelude::*;

/// Request already sent for a details part.
enum PartFetch {
    Graph {
        id: String,
        data: ApiFuture<BigGraphWidgetParams>,
    },
    Widget {
        id: String,
        data: ApiFuture<WidgetInfo>,
    },
}

/// Sends the request a part needs; `None` for parts rendered without data.
fn start_part_fetch(context: &DashboardContext, part: &DetailsPart) -> Option<PartFetch> {
    PartRequest::for_part(part).map(|request| match request {
        PartRequest::Graph(id) => {
            let data = context.get_addition_graph_data(&id);
            PartFetch::Graph { id, data }
        }
        PartRequest::Widget(id) => {
            let data = context.get_addition_widget_data(&id);
            PartFetch::Widget { id, data }
        }
    })
}

/// Content of one details part.
///
/// Graph and widget parts fetch through `context` and render inside a
/// [`LoadableView`]; any other part type renders the placeholder without a
/// fetch.
pub fn render_part(context: &DashboardContext, part: &DetailsPart, widget_size: WidgetSize) -> AnyView {
    match start_part_fetch(context, part) {
        Some(PartFetch::Graph { id, data }) => {
            let render = move |params: BigGraphWidgetParams| {
                view! { <BigGraphWidgetContent params=params widget_size=widget_size /> }.into_any()
            };
            let label = format!("graph '{}'", id);
            view! { <LoadableView func=move || data render=render label=label /> }.into_any()
        }
        Some(PartFetch::Widget { id, data }) => {
            let render_context = context.clone();
            let label = format!("widget '{}'", id);
            let render = move |info: WidgetInfo| render_widget(&render_context, &id, info, widget_size);
            view! { <LoadableView func=move || data render=render label=label /> }.into_any()
        }
        None => view! { <NotImplementedWidgetContent /> }.into_any(),
    }
}

/// Expanded content of a big table row: one pane or a tab per part,
/// followed by the row's insights.
#[component]
pub fn BigTableDetails(
    details: BigTableRowDetails,
    widget_size: WidgetSize,
    /// Source of graph and widget data for the parts
    context: DashboardContext,
) -> impl IntoView {
    let plan = DetailsPlan::of(&details);

    let body = match plan.body {
        DetailsBody::Empty => {
            log::warn!("Big table row details without parts");
            view! { <></> }.into_any()
        }
        DetailsBody::Single(part) => render_part(&context, part, widget_size),
        DetailsBody::Tabbed(parts) => {
            let tabs: Vec<AutoTab> = parts
                .iter()
                .map(|part| AutoTab {
                    title: part.title.clone(),
                    content: render_part(&context, part, widget_size),
                })
                .collect();
            view! { <AutoTabs tabs=tabs /> }.into_any()
        }
    };

    let insights = plan
        .insights
        .iter()
        .cloned()
        .map(|record| view! { <InsightBlock data=record /> })
        .collect_view();

    view! {
        <div class="big-table-details">
            {body}
            {insights}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dashboard_context::DashboardDataSource;
    use std::sync::{Arc, Mutex};

    /// Records every request as `"kind:id"` and never resolves.
    #[derive(Default)]
    struct RecordingSource {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl DashboardDataSource for RecordingSource {
        fn get_addition_graph_data(&self, id: &str) -> ApiFuture<BigGraphWidgetParams> {
            self.calls.lock().unwrap().push(format!("graph:{}", id));
            Box::pin(std::future::pending())
        }

        fn get_addition_widget_data(&self, id: &str) -> ApiFuture<WidgetInfo> {
            self.calls.lock().unwrap().push(format!("widget:{}", id));
            Box::pin(std::future::pending())
        }
    }

    fn part(id: &str, part_type: Option<&str>) -> DetailsPart {
        DetailsPart {
            id: id.to_string(),
            title: id.to_uppercase(),
            part_type: part_type.map(str::to_string),
        }
    }

    #[test]
    fn test_part_fetch_dispatch_by_type() {
        let source = RecordingSource::default();
        let calls = source.calls.clone();
        let context = DashboardContext::new(source);

        let graph = start_part_fetch(&context, &part("a", None));
        let widget = start_part_fetch(&context, &part("b", Some("widget")));
        let timeline = start_part_fetch(&context, &part("c", Some("timeline")));

        assert!(matches!(&graph, Some(PartFetch::Graph { id, .. }) if id == "a"));
        assert!(matches!(&widget, Some(PartFetch::Widget { id, .. }) if id == "b"));
        assert!(timeline.is_none());
        assert_eq!(*calls.lock().unwrap(), vec!["graph:a", "widget:b"]);
    }

    #[test]
    fn test_explicit_graph_type_fetches_graph() {
        let source = RecordingSource::default();
        let calls = source.calls.clone();
        let context = DashboardContext::new(source);

        let fetch = start_part_fetch(&context, &part("p1", Some("graph")));

        assert!(matches!(fetch, Some(PartFetch::Graph { .. })));
        assert_eq!(*calls.lock().unwrap(), vec!["graph:p1"]);
    }

    #[test]
    fn test_each_tab_part_fetches_once() {
        let source = RecordingSource::default();
        let calls = source.calls.clone();
        let context = DashboardContext::new(source);
        let details = BigTableRowDetails {
            parts: vec![part("a", None), part("b", Some("widget")), part("c", Some("Graph"))],
            insights: None,
        };

        let DetailsBody::Tabbed(parts) = DetailsPlan::of(&details).body else {
            panic!("three parts must be tabbed");
        };
        let fetches: Vec<_> = parts.iter().map(|p| start_part_fetch(&context, p)).collect();

        assert_eq!(fetches.iter().filter(|f| f.is_some()).count(), 2);
        assert_eq!(*calls.lock().unwrap(), vec!["graph:a", "widget:b"]);
    }
}
