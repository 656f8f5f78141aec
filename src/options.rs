//! Configuration options for page extraction.
//!
//! This module provides [`ExtractOptions`] and [`ExtractOptionsBuilder`]. The
//! defaults describe the Domo support site export; every value can be changed
//! through the builder or loaded from a JSON file.
//!
//! ## Example
//!
//! ```rust
//! use helpcenter_extract::ExtractOptions;
//! use url::Url;
//!
//! let options = ExtractOptions::builder()
//!     .base_url(Url::parse("https://help.example.com").unwrap())
//!     .deny_key("article_number")
//!     .build();
//!
//! assert!(options.is_denied("article_number"));
//! assert!(options.is_denied("preview_article"));
//! ```

use crate::error::{ExtractError, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use url::Url;

/// Site the saved pages were downloaded from.
pub const DEFAULT_BASE_URL: &str = "https://domo-support.domo.com";

static DEFAULT_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"));

/// Canonical keys dropped from every record.
pub const DEFAULT_DENY_LIST: [&str; 5] = [
    "preview_article",
    "summarybriefly_describe_the_article_the_summary_is_used_in_search_results_to_help_users_find_relevant_articles_you_can_improve_the_accuracy_of_search_results_by_including_phrases_that_your_customers_use_to_describe_this_issue_or_topic",
    "primary_version",
    "",
    "article_created_date",
];

/// `chrono` formats tried in order for `first_published_date`.
pub const DEFAULT_DATE_FORMATS: [&str; 7] = [
    "%m/%d/%Y",
    "%m/%d/%Y, %I:%M %p",
    "%m/%d/%Y %I:%M %p",
    "%b %d, %Y",
    "%B %d, %Y",
    "%Y-%m-%d",
    "%d %b %Y",
];

/// Configuration for scanning and extraction.
///
/// ## Loading from JSON
///
/// Every field is optional in the file; missing ones fall back to the
/// defaults.
///
/// ```json
/// {
///   "base_url": "https://help.example.com",
///   "deny_list": ["preview_article", "primary_version"]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Site root used for article URLs and derived page URLs.
    ///
    /// Default: `https://domo-support.domo.com`
    pub base_url: Url,

    /// File name of a saved page.
    ///
    /// Default: `index.html`
    pub target_file_name: String,

    /// Class marking the content region of a page.
    ///
    /// Default: `content`
    pub content_class: String,

    /// Canonical keys never emitted in record metadata.
    ///
    /// Default: [`DEFAULT_DENY_LIST`]
    pub deny_list: BTreeSet<String>,

    /// Formats tried when parsing `first_published_date`.
    ///
    /// Default: [`DEFAULT_DATE_FORMATS`]
    pub date_formats: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE.clone(),
            target_file_name: "index.html".to_string(),
            content_class: "content".to_string(),
            deny_list: DEFAULT_DENY_LIST.iter().map(|k| k.to_string()).collect(),
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl ExtractOptions {
    /// Creates a new builder for ExtractOptions
    pub fn builder() -> ExtractOptionsBuilder {
        ExtractOptionsBuilder::default()
    }

    /// Load options from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExtractError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse options from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ExtractError::Config(e.to_string()))
    }

    /// Whether a canonical key is on the deny-list
    pub fn is_denied(&self, key: &str) -> bool {
        self.deny_list.contains(key)
    }
}

/// Builder for [`ExtractOptions`].
#[derive(Default)]
pub struct ExtractOptionsBuilder {
    base_url: Option<Url>,
    target_file_name: Option<String>,
    content_class: Option<String>,
    deny_list: Option<BTreeSet<String>>,
    extra_denied: Vec<String>,
    date_formats: Option<Vec<String>>,
}

impl ExtractOptionsBuilder {
    /// Set the site root
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the saved page file name
    pub fn target_file_name(mut self, name: impl Into<String>) -> Self {
        self.target_file_name = Some(name.into());
        self
    }

    /// Set the content region class
    pub fn content_class(mut self, class: impl Into<String>) -> Self {
        self.content_class = Some(class.into());
        self
    }

    /// Replace the deny-list
    pub fn deny_list<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deny_list = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Add one key to the deny-list
    pub fn deny_key(mut self, key: impl Into<String>) -> Self {
        self.extra_denied.push(key.into());
        self
    }

    /// Replace the date formats
    pub fn date_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_formats = Some(formats.into_iter().map(Into::into).collect());
        self
    }

    /// Build the ExtractOptions
    pub fn build(self) -> ExtractOptions {
        let defaults = ExtractOptions::default();
        let mut deny_list = self.deny_list.unwrap_or(defaults.deny_list);
        deny_list.extend(self.extra_denied);
        ExtractOptions {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            target_file_name: self.target_file_name.unwrap_or(defaults.target_file_name),
            content_class: self.content_class.unwrap_or(defaults.content_class),
            deny_list,
            date_formats: self.date_formats.unwrap_or(defaults.date_formats),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_support_site() {
        let options = ExtractOptions::default();
        assert_eq!(options.base_url.as_str(), "https://domo-support.domo.com/");
        assert_eq!(options.target_file_name, "index.html");
        assert!(options.is_denied(""));
        assert!(options.is_denied("article_created_date"));
        assert!(!options.is_denied("article_number"));
    }

    #[test]
    fn builder_replaces_and_extends_deny_list() {
        let options = ExtractOptions::builder()
            .deny_list(["a"])
            .deny_key("b")
            .build();
        assert!(options.is_denied("a"));
        assert!(options.is_denied("b"));
        assert!(!options.is_denied("preview_article"));
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let options = ExtractOptions::from_json_str(
            r#"{"base_url": "https://help.example.com", "deny_list": ["x"]}"#,
        )
        .unwrap();
        assert_eq!(options.base_url.host_str(), Some("help.example.com"));
        assert!(options.is_denied("x"));
        assert!(!options.is_denied("primary_version"));
        assert_eq!(options.content_class, "content");
        assert_eq!(options.date_formats.len(), DEFAULT_DATE_FORMATS.len());
    }

    #[test]
    fn bad_json_is_a_config_error() {
        let err = ExtractOptions::from_json_str(r#"{"base_url": "not a url"}"#).unwrap_err();
        assert!(matches!(err, ExtractError::Config(_)));
    }
}
