//! Loading saved pages and isolating their content region.
//!
//! ## Example
//!
//! ```rust
//! use helpcenter_extract::{ExtractOptions, PageDocument};
//!
//! let html = r#"<html><body><nav>menu</nav><div class="content"><h1>Hi</h1></div></body></html>"#;
//! let page = PageDocument::from_html(html, "saved/index.html", &ExtractOptions::default()).unwrap();
//!
//! assert!(page.content().root_element().html().contains("<h1>Hi</h1>"));
//! assert!(!page.content().root_element().html().contains("menu"));
//! ```

use crate::error::{ExtractError, Result};
use crate::options::ExtractOptions;
use crate::scanner::ensure_exists;
use scraper::{Html, Selector};
use std::path::{Path, PathBuf};

/// One saved page, reduced to its content region.
///
/// The region is re-parsed as a standalone fragment so every later query runs
/// against the article markup only, never the site chrome around it.
pub struct PageDocument {
    path: PathBuf,
    content: Html,
}

impl PageDocument {
    /// Read and parse a saved page from disk.
    ///
    /// ## Errors
    ///
    /// - [`ExtractError::NotFound`] if `path` does not exist
    /// - [`ExtractError::Io`] if it cannot be read as UTF-8
    /// - [`ExtractError::MissingRegion`] if no content region is present
    pub fn load(path: &Path, options: &ExtractOptions) -> Result<Self> {
        ensure_exists(path)?;
        let html = std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_html(&html, path, options)
    }

    /// Parse page markup already held in memory.
    ///
    /// `path` is only used to label errors and records.
    pub fn from_html(html: &str, path: impl Into<PathBuf>, options: &ExtractOptions) -> Result<Self> {
        let path = path.into();
        let selector = class_selector(&options.content_class)?;
        let document = Html::parse_document(html);

        let region = document
            .select(&selector)
            .next()
            .ok_or_else(|| ExtractError::MissingRegion { path: path.clone() })?;
        let content = Html::parse_fragment(&region.html());

        Ok(Self { path, content })
    }

    /// Source path of the page
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The isolated content region
    pub fn content(&self) -> &Html {
        &self.content
    }
}

/// Build a selector matching elements that carry `class`.
pub(crate) fn class_selector(class: &str) -> Result<Selector> {
    Selector::parse(&format!(".{}", class))
        .map_err(|e| ExtractError::Config(format!("invalid class `{}`: {:?}", class, e)))
}
