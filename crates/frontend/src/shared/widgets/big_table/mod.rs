mod content;
mod details;
pub mod plan;

pub use content::BigTableWidgetContent;
pub use details::{render_part, BigTableDetails};
