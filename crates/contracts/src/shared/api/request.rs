use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::system::visitor::VisitorId;

pub const DEFAULT_API_BASE_URL: &str = "https://webservices-sahil.herokuapp.com/blog_api/";
pub const DEFAULT_BLOGS_PATH: &str = "blogs/";

/// Where the blog API lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub blogs_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            blogs_path: DEFAULT_BLOGS_PATH.to_string(),
        }
    }
}

/// Query string of the collection endpoint.
#[derive(Serialize)]
struct BlogsQuery<'a> {
    uuid: &'a str,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Collection endpoint without query, e.g. `https://host/blog_api/blogs/`.
    pub fn blogs_url(&self) -> String {
        join_url(&self.base_url, &self.blogs_path)
    }

    /// `GET <base>/blogs/?uuid=<visitor>`
    pub fn blogs_request(&self, visitor: &VisitorId) -> Result<ApiRequest, ApiError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ApiError::InvalidRequest(format!(
                "base url must be absolute http(s): {:?}",
                self.base_url
            )));
        }

        let query = serde_qs::to_string(&BlogsQuery {
            uuid: visitor.as_str(),
        })
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        Ok(ApiRequest {
            endpoint: self.blogs_url(),
            query,
        })
    }
}

/// A fully built GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub endpoint: String,
    pub query: String,
}

impl ApiRequest {
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            self.endpoint.clone()
        } else {
            format!("{}?{}", self.endpoint, self.query)
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_blogs_url() {
        assert_eq!(
            ApiConfig::default().blogs_url(),
            "https://webservices-sahil.herokuapp.com/blog_api/blogs/"
        );
    }

    #[test]
    fn test_blogs_request_carries_uuid() {
        let request = ApiConfig::default()
            .blogs_request(&VisitorId::from_stored("Ab3x9"))
            .unwrap();
        assert_eq!(request.query, "uuid=Ab3x9");
        assert_eq!(
            request.url(),
            "https://webservices-sahil.herokuapp.com/blog_api/blogs/?uuid=Ab3x9"
        );
    }

    #[test]
    fn test_join_handles_slashes() {
        assert_eq!(join_url("http://h/api", "blogs/"), "http://h/api/blogs/");
        assert_eq!(join_url("http://h/api/", "/blogs/"), "http://h/api/blogs/");
        assert_eq!(
            ApiConfig::new("http://localhost:8000/blog_api").blogs_url(),
            "http://localhost:8000/blog_api/blogs/"
        );
    }

    #[test]
    fn test_stored_value_is_encoded() {
        let request = ApiConfig::default()
            .blogs_request(&VisitorId::from_stored("a&b=c"))
            .unwrap();
        assert!(request.query.starts_with("uuid="));
        assert!(!request.query["uuid=".len()..].contains('&'));
        assert!(!request.query["uuid=".len()..].contains('='));
    }

    #[test]
    fn test_relative_base_url_rejected() {
        let err = ApiConfig::new("/blog_api/")
            .blogs_request(&VisitorId::from_stored("Ab3x9"))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[test]
    fn test_url_without_query() {
        let request = ApiRequest {
            endpoint: "http://h/blogs/".to_string(),
            query: String::new(),
        };
        assert_eq!(request.url(), "http://h/blogs/");
    }
}
