//! PageFrame: standard root wrapper for a dashboard page.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"d404_big_table--dashboard"`
//!   - `data-page-category`: one of the `PAGE_CAT_*` constants

use leptos::prelude::*;

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// BEM class list for a page category
pub fn page_class(category: &str, extra: &str) -> String {
    let base = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    /// Additional CSS classes appended after the base class
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class=page_class(category, class)
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_DASHBOARD, ""), "page page--dashboard");
        assert_eq!(
            page_class(PAGE_CAT_DASHBOARD, "d404"),
            "page page--dashboard d404"
        );
        assert_eq!(page_class("unknown", ""), "page");
    }
}
