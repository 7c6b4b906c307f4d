//! Layout and request planning for table row details.
//!
//! Everything here is pure: the components in `details.rs` turn a plan into
//! views and start the fetches it names.

use contracts::dashboards::d404_big_table::{BigTableRowDetails, DetailsPart};
use contracts::shared::widgets::InsightRecord;

/// Resolved content category of a details part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Graph,
    Widget,
    Unimplemented,
}

impl PartKind {
    /// Missing type means graph. Matching is exact and case-sensitive.
    pub fn resolve(part_type: Option<&str>) -> Self {
        match part_type.unwrap_or("graph") {
            "graph" => PartKind::Graph,
            "widget" => PartKind::Widget,
            _ => PartKind::Unimplemented,
        }
    }

    pub fn of(part: &DetailsPart) -> Self {
        Self::resolve(part.part_type.as_deref())
    }
}

/// Data a part needs before it can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartRequest {
    Graph(String),
    Widget(String),
}

impl PartRequest {
    /// `None` for parts rendered without any fetch.
    pub fn for_part(part: &DetailsPart) -> Option<Self> {
        match PartKind::of(part) {
            PartKind::Graph => Some(PartRequest::Graph(part.id.clone())),
            PartKind::Widget => Some(PartRequest::Widget(part.id.clone())),
            PartKind::Unimplemented => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailsBody<'a> {
    /// No parts at all
    Empty,
    /// Exactly one part, rendered without tab chrome
    Single(&'a DetailsPart),
    /// One tab per part, in input order
    Tabbed(&'a [DetailsPart]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailsPlan<'a> {
    pub body: DetailsBody<'a>,
    /// Rendered after the body, in order
    pub insights: &'a [InsightRecord],
}

impl<'a> DetailsPlan<'a> {
    pub fn of(details: &'a BigTableRowDetails) -> Self {
        let body = match details.parts.as_slice() {
            [] => DetailsBody::Empty,
            [single] => DetailsBody::Single(single),
            parts => DetailsBody::Tabbed(parts),
        };
        Self {
            body,
            insights: details.insights.as_deref().unwrap_or_default(),
        }
    }

    /// Requests in render order; unimplemented parts contribute none.
    pub fn requests(&self) -> Vec<PartRequest> {
        let parts: &[DetailsPart] = match self.body {
            DetailsBody::Empty => &[],
            DetailsBody::Single(part) => std::slice::from_ref(part),
            DetailsBody::Tabbed(parts) => parts,
        };
        parts.iter().filter_map(PartRequest::for_part).collect()
    }

    /// Tab labels, or empty when no tab chrome is rendered
    pub fn tab_titles(&self) -> Vec<&'a str> {
        match self.body {
            DetailsBody::Tabbed(parts) => parts.iter().map(|p| p.title.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}
