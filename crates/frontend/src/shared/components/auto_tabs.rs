use leptos::prelude::*;
use thaw::*;

/// One labelled pane of [`AutoTabs`].
pub struct AutoTab {
    pub title: String,
    pub content: AnyView,
}

/// Tab strip over a fixed list of panes.
///
/// Every pane is mounted up front and inactive panes are hidden, so content
/// that fetches on creation does so once, not on every tab switch.
#[component]
pub fn AutoTabs(tabs: Vec<AutoTab>) -> impl IntoView {
    let selected_value = RwSignal::new(tab_value(0));

    let headers = tab_headers(&tabs)
        .into_iter()
        .map(|(value, title)| view! { <Tab value=value>{title}</Tab> })
        .collect_view();

    let panels = tabs
        .into_iter()
        .enumerate()
        .map(|(index, tab)| {
            let value = tab_value(index);
            let panel_class = move || {
                if selected_value.get() == value {
                    "auto-tabs__panel"
                } else {
                    "auto-tabs__panel auto-tabs__panel--hidden"
                }
            };
            view! {
                <div class=panel_class role="tabpanel">
                    {tab.content}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="auto-tabs">
            <TabList selected_value=selected_value>
                {headers}
            </TabList>
            <div class="auto-tabs__content">
                {panels}
            </div>
        </div>
    }
}

/// TabList value for the pane at `index`
fn tab_value(index: usize) -> String {
    format!("tab-{}", index)
}

/// `(value, title)` of every tab header, owned so the header views hold no
/// reference into the panes.
fn tab_headers(tabs: &[AutoTab]) -> Vec<(String, String)> {
    tabs.iter()
        .enumerate()
        .map(|(index, tab)| (tab_value(index), tab.title.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_values_are_unique_per_index() {
        assert_eq!(tab_value(0), "tab-0");
        assert_ne!(tab_value(1), tab_value(10));
    }

    #[test]
    fn test_tab_headers_keep_order() {
        let tabs = vec![
            AutoTab {
                title: "Revenue".to_string(),
                content: ().into_any(),
            },
            AutoTab {
                title: "Orders".to_string(),
                content: ().into_any(),
            },
        ];

        assert_eq!(
            tab_headers(&tabs),
            vec![
                ("tab-0".to_string(), "Revenue".to_string()),
                ("tab-1".to_string(), "Orders".to_string()),
            ]
        );
    }
}
