//! API utilities for frontend-backend communication
//!
//! Builds backend URLs from the current window location and wraps the
//! `gloo-net` request/parse sequence every API call repeats.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Port the backend listens on (see `[server]` in config.toml)
pub const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Uses the page's protocol and hostname with [`BACKEND_PORT`], e.g.
/// `"http://localhost:3000"`. Returns an empty string outside a browser,
/// which turns every URL into a relative one.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a URL and decode the JSON body.
///
/// Errors are human-readable strings: transport failure, non-2xx status,
/// or a body that does not match `T`.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
