pub mod auto_tabs;
pub mod loadable_view;
pub mod table;

pub use auto_tabs::{AutoTab, AutoTabs};
pub use loadable_view::{LoadState, LoadableView};
