//! Article record produced for each saved page.
//!
//! ## Example
//!
//! ```rust
//! use helpcenter_extract::{ArticleMetadata, ArticleRecord};
//!
//! let record = ArticleRecord {
//!     page_content: "Body text\n".to_string(),
//!     metadata: ArticleMetadata {
//!         title: "Beast Mode".to_string(),
//!         url: "https://domo-support.domo.com/s/article/beast-mode".to_string(),
//!         ..Default::default()
//!     },
//! };
//!
//! let json = serde_json::to_value(&record).unwrap();
//! assert_eq!(json["metadata"]["title"], "Beast Mode");
//! assert!(json["metadata"].get("description").is_none());
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One extracted help-center article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleRecord {
    /// Article body as normalized Markdown.
    pub page_content: String,

    /// Title, URL and the remaining form fields.
    pub metadata: ArticleMetadata,
}

/// Metadata of an article record.
///
/// Fields with dedicated handling are typed; every other form field is
/// carried in `fields` and serialized inline next to them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArticleMetadata {
    /// Page title, `"Home"` for the landing page.
    pub title: String,

    /// Header description, when the page has a non-empty one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Public article URL built from the `url_name` field.
    pub url: String,

    /// View count with thousands separators removed.
    ///
    /// Always set on extracted records; optional only for hand-built ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_total_view_count: Option<u64>,

    /// First publication date, serialized as `YYYY-MM-DD`.
    ///
    /// Always set on extracted records; optional only for hand-built ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_published_date: Option<NaiveDate>,

    /// Remaining non-empty, non-denied form fields keyed by canonical key.
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

/// Keys owned by the typed metadata fields; never carried in `fields`.
pub(crate) const RESERVED_KEYS: [&str; 5] = [
    "title",
    "description",
    "url",
    "article_total_view_count",
    "first_published_date",
];
