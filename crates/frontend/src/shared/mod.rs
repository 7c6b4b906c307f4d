pub mod api_utils;
pub mod components;
pub mod dashboard_context;
pub mod page_frame;
pub mod widgets;
