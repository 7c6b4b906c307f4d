//! Data context shared by dashboard widgets.
//!
//! Widgets never reach for a global: the page creates a [`DashboardContext`]
//! and passes it down as a prop. The context does not cache or deduplicate;
//! every call starts a new request.

use crate::shared::api_utils::{api_url, fetch_json};
use contracts::shared::widgets::{BigGraphWidgetParams, WidgetInfo};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by data source calls.
///
/// Not `Send`: browser fetches live on the single-threaded WASM executor and
/// are driven with `spawn_local`.
pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, String>>>>;

/// Asynchronous retrieval of widget data by identifier.
pub trait DashboardDataSource: Send + Sync {
    /// Graph payload for a details part
    fn get_addition_graph_data(&self, id: &str) -> ApiFuture<BigGraphWidgetParams>;

    /// Widget payload for a details part or a dashboard slot
    fn get_addition_widget_data(&self, id: &str) -> ApiFuture<WidgetInfo>;
}

/// Cheap, cloneable handle to a [`DashboardDataSource`].
#[derive(Clone)]
pub struct DashboardContext {
    source: Arc<dyn DashboardDataSource>,
}

impl DashboardContext {
    pub fn new(source: impl DashboardDataSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Context backed by the backend HTTP API
    pub fn http() -> Self {
        Self::new(HttpDashboardSource::default())
    }

    pub fn get_addition_graph_data(&self, id: &str) -> ApiFuture<BigGraphWidgetParams> {
        self.source.get_addition_graph_data(id)
    }

    pub fn get_addition_widget_data(&self, id: &str) -> ApiFuture<WidgetInfo> {
        self.source.get_addition_widget_data(id)
    }
}

/// Default API prefix of the big table dashboard endpoints
const API_PREFIX: &str = "/api/d404";

/// [`DashboardDataSource`] talking to the backend with `gloo-net`.
#[derive(Debug, Clone)]
pub struct HttpDashboardSource {
    api_prefix: String,
}

impl Default for HttpDashboardSource {
    fn default() -> Self {
        Self::with_prefix(API_PREFIX)
    }
}

impl HttpDashboardSource {
    pub fn with_prefix(api_prefix: &str) -> Self {
        Self {
            api_prefix: api_prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint path for a resource kind and id; ids are percent-encoded.
    pub fn endpoint(&self, kind: &str, id: &str) -> String {
        format!("{}/{}/{}", self.api_prefix, kind, urlencoding::encode(id))
    }
}

impl DashboardDataSource for HttpDashboardSource {
    fn get_addition_graph_data(&self, id: &str) -> ApiFuture<BigGraphWidgetParams> {
        let url = api_url(&self.endpoint("graph", id));
        Box::pin(async move { fetch_json(&url).await })
    }

    fn get_addition_widget_data(&self, id: &str) -> ApiFuture<WidgetInfo> {
        let url = api_url(&self.endpoint("widget", id));
        Box::pin(async move { fetch_json(&url).await })
    }
}
