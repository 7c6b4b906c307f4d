pub mod dashboard;

pub use dashboard::BigTableDashboard;
