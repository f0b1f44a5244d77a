use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::api::ApiError;

// ============================================================================
// Aggregate
// ============================================================================

/// Запись блога в том виде, в каком её вернул удалённый сервис
///
/// The shape belongs to the remote API. The record is kept verbatim; the
/// accessors below only look up commonly used fields for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogPost(pub Value);

impl BlogPost {
    pub fn title(&self) -> Option<&str> {
        self.first_text(&["title", "name", "heading"])
    }

    pub fn body(&self) -> Option<&str> {
        self.first_text(&["body", "content", "description", "text"])
    }

    pub fn author(&self) -> Option<&str> {
        self.first_text(&["author", "author_name", "user"])
    }

    /// Publication date from `created`, `created_at` or `date`, accepting
    /// RFC 3339 timestamps and plain `YYYY-MM-DD` dates.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.first_text(&["created", "created_at", "date", "published"])?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok())
    }

    /// First `max_chars` characters of the body, cut on a char boundary,
    /// with an ellipsis when shortened.
    pub fn excerpt(&self, max_chars: usize) -> Option<String> {
        let body = self.body()?.trim();
        if body.chars().count() <= max_chars {
            return Some(body.to_string());
        }
        let cut: String = body.chars().take(max_chars).collect();
        Some(format!("{}…", cut.trim_end()))
    }

    fn first_text(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.0.get(*key)?.as_str())
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

// ============================================================================
// Feed decoding
// ============================================================================

/// Splits the collection response into posts.
///
/// Accepts a bare JSON array or a paginated object with a `results` array.
pub fn decode_feed(body: Value) -> Result<Vec<BlogPost>, ApiError> {
    match body {
        Value::Array(items) => Ok(items.into_iter().map(BlogPost).collect()),
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => Ok(items.into_iter().map(BlogPost).collect()),
            _ => Err(ApiError::Decode(
                "expected a list of blog posts or an object with `results`".to_string(),
            )),
        },
        other => Err(ApiError::Decode(format!(
            "expected a list of blog posts, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
