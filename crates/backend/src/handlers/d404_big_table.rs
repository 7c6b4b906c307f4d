use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::shared::widgets::{BigGraphWidgetParams, WidgetInfo};
use std::sync::Arc;

use crate::dashboards::d404_big_table::{DashboardStore, StoreError};

fn error_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound { .. } => {
            tracing::warn!("{}", err);
            StatusCode::NOT_FOUND
        }
        _ => {
            tracing::error!("Dashboard store error: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// GET /api/d404/graph/:id
pub async fn get_graph(
    State(store): State<Arc<DashboardStore>>,
    Path(id): Path<String>,
) -> Result<Json<BigGraphWidgetParams>, StatusCode> {
    store
        .graph(&id)
        .map(|params| Json(params.clone()))
        .map_err(|e| error_status(&e))
}

/// GET /api/d404/widget/:id
pub async fn get_widget(
    State(store): State<Arc<DashboardStore>>,
    Path(id): Path<String>,
) -> Result<Json<WidgetInfo>, StatusCode> {
    store
        .widget(&id)
        .map(|info| Json(info.clone()))
        .map_err(|e| error_status(&e))
}
