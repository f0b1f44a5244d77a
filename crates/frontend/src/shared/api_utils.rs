//! Browser HTTP transport for API clients.

use async_trait::async_trait;
use contracts::shared::api::{ApiError, ApiRequest, HttpTransport};
use gloo_net::http::Request;

/// [`HttpTransport`] over the browser's `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn get_json(&self, request: &ApiRequest) -> Result<serde_json::Value, ApiError> {
        let response = Request::get(&request.url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
