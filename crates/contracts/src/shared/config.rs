use serde::Deserialize;

use super::api::ApiConfig;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown names fall back to `Info`.
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Info)
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://webservices-sahil.herokuapp.com/blog_api/"
blogs_path = "blogs/"

[logging]
level = "info"
"#;

impl SiteConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Embedded defaults with optional overrides on top.
    ///
    /// Empty override strings are ignored.
    pub fn with_overrides(mut self, api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        if let Some(base_url) = api_base_url.filter(|s| !s.trim().is_empty()) {
            self.api.base_url = base_url.trim().to_string();
        }
        if let Some(level) = log_level.filter(|s| !s.trim().is_empty()) {
            self.logging.level = level.trim().to_string();
        }
        self
    }
}
