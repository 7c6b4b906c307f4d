//! Widget content renderers.

pub mod big_graph;
pub mod big_table;
pub mod insight_block;
pub mod not_implemented;
pub mod renderer;

pub use big_graph::BigGraphWidgetContent;
pub use big_table::{BigTableDetails, BigTableWidgetContent};
pub use insight_block::InsightBlock;
pub use not_implemented::NotImplementedWidgetContent;
pub use renderer::render_widget;
