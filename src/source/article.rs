//! The response envelope and article types returned by the headlines API.
//!
//! Every field of [`Article`] is optional because the upstream API omits or
//! nulls them freely.  Unknown fields are ignored so that additions on the
//! server side never break deserialization.
//!
//! ## For contributors
//!
//! Articles are kept in the order the server returned them; nothing in the
//! application re-sorts them.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

/// Top-level response of `GET /v2/top-headlines`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResult {
    /// `"ok"` on success, `"error"` when the API rejected the request.
    pub status: String,

    /// Total number of matching results on the server (may exceed the page).
    #[serde(default)]
    pub total_results: u64,

    /// Articles in server order.
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// The publisher an article came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// A single headline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: Option<ArticleSource>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,

    /// Link to the full story.  Only exposed for navigation via
    /// [`Article::link`], which rejects anything that is not an absolute URL.
    pub url: Option<String>,

    pub url_to_image: Option<String>,

    /// Publication time as sent by the server, usually RFC 3339.
    pub published_at: Option<String>,

    /// Truncated body snippet.
    pub content: Option<String>,
}

impl Article {
    /// The article URL, if present and syntactically valid.
    pub fn link(&self) -> Option<Url> {
        self.url.as_deref().and_then(|u| Url::parse(u).ok())
    }

    /// Parsed publication timestamp.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        self.published_at
            .as_deref()
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Publication time formatted for display.
    ///
    /// Falls back to the raw server string when it is not RFC 3339, and to an
    /// empty string when the field is missing.
    pub fn published_label(&self) -> String {
        match self.published() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            None => self.published_at.clone().unwrap_or_default(),
        }
    }

    /// Name of the publishing source, if the server sent one.
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.name.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BODY: &str = r#"{
        "status": "ok",
        "totalResults": 2,
        "articles": [
            {
                "source": { "id": null, "name": "Index.hu" },
                "author": "Kovács Anna",
                "title": "Second headline",
                "description": "Desc",
                "url": "https://index.hu/a/2",
                "urlToImage": "https://index.hu/img/2.jpg",
                "publishedAt": "2024-03-05T09:15:00Z",
                "content": "Body…"
            },
            {
                "source": { "id": "hvg", "name": "HVG" },
                "author": null,
                "title": "First headline",
                "description": null,
                "url": "https://hvg.hu/a/1",
                "urlToImage": null,
                "publishedAt": "2024-03-06T10:00:00Z",
                "content": null
            }
        ]
    }"#;

    #[test]
    fn deserializes_full_envelope_in_server_order() {
        let result: NewsResult = serde_json::from_str(FULL_BODY).unwrap();

        assert_eq!(result.status, "ok");
        assert_eq!(result.total_results, 2);
        assert_eq!(result.articles.len(), 2);
        // The older article comes first because the server put it first.
        assert_eq!(result.articles[0].title.as_deref(), Some("Second headline"));
        assert_eq!(result.articles[1].title.as_deref(), Some("First headline"));
        assert_eq!(result.articles[0].source_name(), Some("Index.hu"));
        assert_eq!(
            result.articles[0].url_to_image.as_deref(),
            Some("https://index.hu/img/2.jpg")
        );
        assert!(result.articles[1].author.is_none());
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"{
            "status": "ok",
            "totalResults": 1,
            "nextPage": "abc",
            "articles": [{ "title": "T", "sentiment": 0.4 }]
        }"#;
        let result: NewsResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.articles[0].title.as_deref(), Some("T"));
    }

    #[test]
    fn missing_articles_defaults_to_empty() {
        let result: NewsResult = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(result.articles.is_empty());
        assert_eq!(result.total_results, 0);
    }

    #[test]
    fn link_requires_absolute_url() {
        let good = Article {
            url: Some("https://x".into()),
            ..Default::default()
        };
        let relative = Article {
            url: Some("/news/1".into()),
            ..Default::default()
        };
        assert_eq!(good.link().map(|u| u.to_string()), Some("https://x/".into()));
        assert!(relative.link().is_none());
        assert!(Article::default().link().is_none());
    }

    #[test]
    fn published_label_formats_rfc3339() {
        let a = Article {
            published_at: Some("2024-03-05T09:15:00Z".into()),
            ..Default::default()
        };
        assert_eq!(a.published_label(), "2024-03-05 09:15");
    }

    #[test]
    fn published_label_falls_back_to_raw_value() {
        let a = Article {
            published_at: Some("2024-01-01".into()),
            ..Default::default()
        };
        assert!(a.published().is_none());
        assert_eq!(a.published_label(), "2024-01-01");
        assert_eq!(Article::default().published_label(), "");
    }
}
