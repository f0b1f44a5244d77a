use std::rc::Rc;

use super::aggregate::{decode_feed, BlogPost};
use crate::shared::api::{ApiConfig, ApiError, HttpTransport};
use crate::system::visitor::{KeyValueStorage, VisitorIdStore};

/// Reads the blog collection on behalf of the current visitor.
///
/// One call is one request: no retry, timeout, caching or deduplication.
pub struct BlogClient<T, S> {
    config: ApiConfig,
    transport: T,
    visitors: Rc<VisitorIdStore<S>>,
}

impl<T, S> BlogClient<T, S>
where
    T: HttpTransport,
    S: KeyValueStorage,
{
    pub fn new(config: ApiConfig, transport: T, visitors: Rc<VisitorIdStore<S>>) -> Self {
        Self {
            config,
            transport,
            visitors,
        }
    }

    /// `GET <base>/blogs/?uuid=<visitor id>`
    ///
    /// The visitor id is resolved first; if storage fails no request is sent.
    pub async fn fetch_blogs(&self) -> Result<Vec<BlogPost>, ApiError> {
        let visitor = self.visitors.get_or_create()?;
        let request = self.config.blogs_request(&visitor)?;

        log::debug!("GET {}", request.url());
        let body = match self.transport.get_json(&request).await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("fetching blogs from {} failed: {}", request.endpoint, e);
                return Err(e);
            }
        };

        let posts = decode_feed(body)?;
        log::info!("received {} blog posts", posts.len());
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiRequest;
    use crate::system::visitor::{MemoryStorage, StorageError, VISITOR_ID_KEY};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    /// Records every request and answers with a canned result.
    struct RecordingTransport {
        requests: RefCell<Vec<String>>,
        response: Result<Value, ApiError>,
    }

    impl RecordingTransport {
        fn replying(response: Result<Value, ApiError>) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                response,
            }
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for RecordingTransport {
        async fn get_json(&self, request: &ApiRequest) -> Result<Value, ApiError> {
            self.requests.borrow_mut().push(request.url());
            self.response.clone()
        }
    }

    struct UnavailableStorage;

    impl KeyValueStorage for UnavailableStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("localStorage is disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("localStorage is disabled".to_string()))
        }
    }

    fn store_with(id: &str) -> Rc<VisitorIdStore<MemoryStorage>> {
        let storage = MemoryStorage::new();
        storage.set(VISITOR_ID_KEY, id).unwrap();
        Rc::new(VisitorIdStore::new(storage))
    }

    #[tokio::test]
    async fn test_fetch_blogs_sends_one_get_with_uuid() {
        let transport = RecordingTransport::replying(Ok(json!([{ "title": "a" }])));
        let client = BlogClient::new(ApiConfig::default(), &transport, store_with("Ab3x9"));

        let posts = client.fetch_blogs().await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(
            *transport.requests.borrow(),
            vec!["https://webservices-sahil.herokuapp.com/blog_api/blogs/?uuid=Ab3x9".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fetch_blogs_creates_visitor_id_when_missing() {
        let transport = RecordingTransport::replying(Ok(json!([])));
        let store = Rc::new(VisitorIdStore::new(MemoryStorage::new()));
        let client = BlogClient::new(ApiConfig::default(), &transport, Rc::clone(&store));

        client.fetch_blogs().await.unwrap();

        let id = store.current().unwrap().expect("visitor id persisted");
        assert!(id.is_canonical());
        assert_eq!(
            transport.requests.borrow()[0],
            format!("{}?uuid={}", ApiConfig::default().blogs_url(), id)
        );
    }

    #[tokio::test]
    async fn test_same_uuid_across_calls() {
        let transport = RecordingTransport::replying(Ok(json!([])));
        let client = BlogClient::new(
            ApiConfig::default(),
            &transport,
            Rc::new(VisitorIdStore::new(MemoryStorage::new())),
        );

        client.fetch_blogs().await.unwrap();
        client.fetch_blogs().await.unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
    }

    #[tokio::test]
    async fn test_empty_stored_id_is_not_sent() {
        let transport = RecordingTransport::replying(Ok(json!([])));
        let store = store_with("");
        let client = BlogClient::new(ApiConfig::default(), &transport, Rc::clone(&store));

        client.fetch_blogs().await.unwrap();

        let id = store.current().unwrap().expect("visitor id replaced");
        assert!(id.is_canonical());
        let url = transport.requests.borrow()[0].clone();
        assert!(!url.ends_with("?uuid="));
        assert!(url.ends_with(&format!("?uuid={}", id)));
    }

    #[tokio::test]
    async fn test_network_error_propagates() {
        let transport =
            RecordingTransport::replying(Err(ApiError::Network("connection refused".to_string())));
        let client = BlogClient::new(ApiConfig::default(), &transport, store_with("Ab3x9"));

        let err = client.fetch_blogs().await.unwrap_err();

        assert_eq!(err, ApiError::Network("connection refused".to_string()));
        assert_eq!(transport.requests.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_http_status_propagates() {
        let transport = RecordingTransport::replying(Err(ApiError::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }));
        let client = BlogClient::new(ApiConfig::default(), &transport, store_with("Ab3x9"));

        let err = client.fetch_blogs().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_an_error() {
        let transport = RecordingTransport::replying(Ok(json!({ "detail": "Not found." })));
        let client = BlogClient::new(ApiConfig::default(), &transport, store_with("Ab3x9"));

        assert!(matches!(client.fetch_blogs().await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_storage_failure_sends_no_request() {
        let transport = RecordingTransport::replying(Ok(json!([])));
        let client = BlogClient::new(
            ApiConfig::default(),
            &transport,
            Rc::new(VisitorIdStore::new(UnavailableStorage)),
        );

        let err = client.fetch_blogs().await.unwrap_err();

        assert!(matches!(err, ApiError::Storage(StorageError::Unavailable(_))));
        assert!(transport.requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_configured_base_url() {
        let transport = RecordingTransport::replying(Ok(json!([])));
        let client = BlogClient::new(
            ApiConfig::new("http://localhost:8000/blog_api"),
            &transport,
            store_with("zZ009"),
        );

        client.fetch_blogs().await.unwrap();
        assert_eq!(
            transport.requests.borrow()[0],
            "http://localhost:8000/blog_api/blogs/?uuid=zZ009"
        );
    }
}
