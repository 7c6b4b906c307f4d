use contracts::shared::widgets::{InsightLevel, InsightRecord};
use leptos::prelude::*;

fn level_class(level: InsightLevel) -> &'static str {
    match level {
        InsightLevel::Info => "insight-block insight-block--info",
        InsightLevel::Success => "insight-block insight-block--success",
        InsightLevel::Warning => "insight-block insight-block--warning",
        InsightLevel::Critical => "insight-block insight-block--critical",
    }
}

fn level_marker(level: InsightLevel) -> &'static str {
    match level {
        InsightLevel::Info => "\u{2139}",
        InsightLevel::Success => "\u{2714}",
        InsightLevel::Warning => "\u{26a0}",
        InsightLevel::Critical => "\u{2716}",
    }
}

/// One insight annotation under widget content
#[component]
pub fn InsightBlock(data: InsightRecord) -> impl IntoView {
    view! {
        <div class=level_class(data.level)>
            <span class="insight-block__marker">{level_marker(data.level)}</span>
            <div class="insight-block__body">
                <div class="insight-block__title">{data.title}</div>
                <div class="insight-block__text">{data.text}</div>
            </div>
        </div>
    }
}
