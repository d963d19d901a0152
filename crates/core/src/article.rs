//! Article record produced by extraction.
//!
//! This module defines the [`Article`] struct, the single data structure
//! flowing through the pipeline: built once by the extractor, consumed
//! immediately by the renderer, never mutated.

use serde::Serialize;

use crate::{GrabError, Result};

/// The complete result of extracting one article page.
///
/// An Article is either fully populated (with the documented defaults for
/// author and publish time) or it does not exist at all; the extractor
/// returns an error instead of a partial record.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    /// Article title; never empty.
    pub title: String,

    /// Article body with structural HTML already converted to Markdown.
    pub content: String,

    /// Author name; `"anonymous"` when no author element was found.
    pub author: String,

    /// Publish timestamp as shown on the page, or the capture time
    /// formatted `YYYY-MM-DD HH:MM:SS` when the page carries none.
    pub publish_time: String,

    /// Tag labels in document order; may be empty.
    pub tags: Vec<String>,

    /// The original request URL, carried through unchanged.
    pub source_url: String,
}

impl Article {
    /// Gets the article as structured JSON.
    ///
    /// Debug view of the full record; the normal output path is the
    /// Markdown renderer.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| GrabError::Extraction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Article {
        Article {
            title: "Test Article".to_string(),
            content: "Body text".to_string(),
            author: "anonymous".to_string(),
            publish_time: "2024-01-15 08:30:00".to_string(),
            tags: vec!["rust".to_string(), "web".to_string()],
            source_url: "https://blog.csdn.net/u/article/details/1".to_string(),
        }
    }

    #[test]
    fn test_article_serialization() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains(r#""title":"Test Article""#));
        assert!(json.contains(r#""author":"anonymous""#));
        assert!(json.contains(r#""tags":["rust","web"]"#));
    }

    #[test]
    fn test_to_json() {
        let json = sample().to_json().unwrap();
        assert!(json.is_object());
        assert_eq!(json.get("publish_time").and_then(|v| v.as_str()), Some("2024-01-15 08:30:00"));
        assert!(json.get("source_url").is_some());
    }
}
