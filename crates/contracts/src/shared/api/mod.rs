//! HTTP plumbing shared by API clients: request description, transport seam
//! and error type.

pub mod error;
pub mod request;
pub mod transport;

pub use error::ApiError;
pub use request::{ApiConfig, ApiRequest, DEFAULT_API_BASE_URL, DEFAULT_BLOGS_PATH};
pub use transport::HttpTransport;
