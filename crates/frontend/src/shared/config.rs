//! Site configuration for the browser build.
//!
//! Starts from the embedded default and applies build-time overrides:
//! `BLOG_API_BASE_URL` and `BLOG_LOG_LEVEL`.

use contracts::shared::config::{SiteConfig, DEFAULT_CONFIG};

thread_local! {
    static SITE_CONFIG: SiteConfig = load_config();
}

fn load_config() -> SiteConfig {
    // Logging is not up yet; the embedded default is covered by tests.
    SiteConfig::from_toml_str(DEFAULT_CONFIG)
        .unwrap_or_default()
        .with_overrides(option_env!("BLOG_API_BASE_URL"), option_env!("BLOG_LOG_LEVEL"))
}

pub fn site_config() -> SiteConfig {
    SITE_CONFIG.with(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_config_has_blogs_endpoint() {
        let config = site_config();
        assert!(config.api.blogs_url().ends_with("/blogs/"));
        assert!(config.api.base_url.starts_with("http"));
    }
}
