use leptos::prelude::*;

/// Placeholder for content types this client cannot render.
#[component]
pub fn NotImplementedWidgetContent() -> impl IntoView {
    view! {
        <div class="widget-placeholder">
            <span class="widget-placeholder__text">"This content type is not supported yet"</span>
        </div>
    }
}
