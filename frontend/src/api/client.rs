//! HTTP API Client
//!
//! Fetches the sample payload from the backend.

use gloo_net::http::Request;
use serde_json::Value;
use web_sys::AbortSignal;

/// Endpoint rendered by the home screen. Same-origin: the backend serves this
/// frontend, and `trunk serve` proxies `/api/` to it during development.
pub const DATA_ENDPOINT: &str = "/api/data";

/// Fetch `/api/data` and parse the body as JSON.
///
/// The status code is not inspected; whatever body comes back is parsed.
/// Network and parse failures are both reduced to their string form.
pub async fn fetch_data(abort: Option<&AbortSignal>) -> Result<Value, String> {
    let response = Request::get(DATA_ENDPOINT)
        .abort_signal(abort)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    response.json::<Value>().await.map_err(|e| e.to_string())
}
