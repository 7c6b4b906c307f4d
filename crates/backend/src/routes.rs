use axum::{routing::get, Router};
use std::sync::Arc;

use crate::dashboards::d404_big_table::DashboardStore;
use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes(store: Arc<DashboardStore>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D404 BIG TABLE DASHBOARD
        // ========================================
        .route(
            "/api/d404/graph/:id",
            get(handlers::d404_big_table::get_graph),
        )
        .route(
            "/api/d404/widget/:id",
            get(handlers::d404_big_table::get_widget),
        )
        .with_state(store)
}
