use contracts::domain::a001_blog_post::{BlogClient, BlogPost};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::GlooTransport;
use crate::shared::config::site_config;
use crate::system::visitor::storage::{visitor_store, BrowserStorage};

pub fn blog_client() -> BlogClient<GlooTransport, BrowserStorage> {
    BlogClient::new(site_config().api, GlooTransport, visitor_store())
}

/// Fetch the blog collection for the current visitor
pub async fn fetch_blogs() -> Result<Vec<BlogPost>, ApiError> {
    blog_client().fetch_blogs().await
}
