pub mod d404_big_table;

pub use d404_big_table::ui::BigTableDashboard;
