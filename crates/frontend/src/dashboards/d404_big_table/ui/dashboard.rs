use crate::shared::components::LoadableView;
use crate::shared::dashboard_context::DashboardContext;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::widgets::render_widget;
use contracts::shared::widgets::{WidgetInfo, WidgetSize};
use leptos::prelude::*;

/// Big table dashboard: one widget loaded by id, rendered by its type.
#[component]
pub fn BigTableDashboard(
    context: DashboardContext,
    #[prop(into)] widget_id: String,
    #[prop(optional)] widget_size: WidgetSize,
) -> impl IntoView {
    let fetch_context = context.clone();
    let fetch_id = widget_id.clone();
    let get = move || fetch_context.get_addition_widget_data(&fetch_id);

    let label = format!("widget '{}'", widget_id);
    let render_id = widget_id.clone();
    let render = move |info: WidgetInfo| {
        log::debug!("Widget '{}' loaded as {}", render_id, info.type_name());
        render_widget(&context, &render_id, info, widget_size)
    };

    view! {
        <PageFrame page_id="d404_big_table--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2 class="page__title">{widget_id}</h2>
            </div>
            <div class="page__content">
                <LoadableView func=get render=render label=label />
            </div>
        </PageFrame>
    }
}
