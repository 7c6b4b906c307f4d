use super::details::BigTableDetails;
use crate::shared::dashboard_context::DashboardContext;
use contracts::dashboards::d404_big_table::BigTableWidgetParams;
use contracts::shared::widgets::WidgetSize;
use leptos::prelude::*;

/// Clicking the expanded row collapses it; clicking another row moves the
/// expansion there.
fn toggle_expanded(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Table widget. Rows that carry details expand into [`BigTableDetails`].
#[component]
pub fn BigTableWidgetContent(
    params: BigTableWidgetParams,
    context: DashboardContext,
    #[prop(optional)] widget_size: WidgetSize,
) -> impl IntoView {
    let expanded = RwSignal::new(None::<usize>);
    let column_count = params.columns.len().max(1);

    let title = params
        .title
        .clone()
        .map(|t| view! { <div class="big-table__title">{t}</div> });

    let header = params
        .columns
        .iter()
        .map(|column| view! { <th class="big-table__header-cell">{column.clone()}</th> })
        .collect_view();

    let rows = params
        .rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let expandable = row.details.is_some();

            let row_class = move || {
                if !expandable {
                    "big-table__row"
                } else if expanded.get() == Some(index) {
                    "big-table__row big-table__row--expandable big-table__row--expanded"
                } else {
                    "big-table__row big-table__row--expandable"
                }
            };

            let on_click = move |_| {
                if expandable {
                    expanded.update(|current| *current = toggle_expanded(*current, index));
                }
            };

            let cells = row
                .cells
                .into_iter()
                .map(|cell| view! { <td class="big-table__cell">{cell}</td> })
                .collect_view();

            let details = row.details;
            let context = context.clone();
            let details_view = move || {
                details
                    .clone()
                    .filter(|_| expanded.get() == Some(index))
                    .map(|details| {
                        view! {
                            <tr class="big-table__details-row">
                                <td colspan=column_count.to_string()>
                                    <BigTableDetails
                                        details=details
                                        widget_size=widget_size
                                        context=context.clone()
                                    />
                                </td>
                            </tr>
                        }
                    })
            };

            view! {
                <tr class=row_class on:click=on_click>
                    {cells}
                </tr>
                {details_view}
            }
        })
        .collect_view();

    view! {
        <div class="big-table">
            {title}
            <table class="big-table__table">
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expanded() {
        assert_eq!(toggle_expanded(None, 2), Some(2));
        assert_eq!(toggle_expanded(Some(2), 2), None);
        assert_eq!(toggle_expanded(Some(2), 5), Some(5));
    }
}
