pub mod demo;
pub mod store;

pub use store::{DashboardData, DashboardStore, StoreError};
