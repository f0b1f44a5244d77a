use async_trait::async_trait;

use super::error::ApiError;
use super::request::ApiRequest;

/// Трейт для HTTP транспорта
///
/// Futures are not required to be `Send`: the browser implementation runs on
/// the single-threaded wasm event loop.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Performs one GET request and decodes the body as JSON.
    ///
    /// Non-2xx responses must be reported as [`ApiError::Status`].
    async fn get_json(&self, request: &ApiRequest) -> Result<serde_json::Value, ApiError>;
}

#[async_trait(?Send)]
impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn get_json(&self, request: &ApiRequest) -> Result<serde_json::Value, ApiError> {
        (**self).get_json(request).await
    }
}
