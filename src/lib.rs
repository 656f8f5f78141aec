//! # helpcenter-extract
//!
//! Extract article records from help-center pages saved to disk.
//!
//! ## Overview
//!
//! A help-center export is a directory tree of saved `index.html` pages. Each
//! page holds its article inside a `content` region: a title, an optional
//! header description and a set of Lightning `slds-form` fields (body, URL
//! name, view count, publication date and so on). This crate turns every
//! such page into an [`ArticleRecord`]: the body as normalized Markdown plus a
//! metadata map ready for JSON serialization.
//!
//! ## Key Features
//!
//! - **Directory Scan**: Finds every saved page at any depth
//! - **Content Isolation**: Queries only the content region, never site chrome
//! - **Markdown Bodies**: Links reduced to text, images dropped, whitespace tidied
//! - **Field Mapping**: Labels canonicalized to snake_case keys with a configurable deny-list
//! - **Typed Metadata**: Integer view counts and `YYYY-MM-DD` publication dates
//! - **Resilient Batches**: One broken page never aborts a run
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use helpcenter_extract::{process_directory, ExtractOptions};
//! use std::path::Path;
//!
//! let options = ExtractOptions::default();
//! let report = process_directory(Path::new("./content"), &options).unwrap();
//!
//! for record in report.records() {
//!     println!("{}: {}", record.metadata.title, record.metadata.url);
//! }
//! for (path, error) in report.failures() {
//!     eprintln!("{}: {}", path.display(), error);
//! }
//! ```
//!
//! ## Single Pages
//!
//! ```rust,no_run
//! use helpcenter_extract::{extract_article, ExtractOptions, PageDocument};
//! use std::path::Path;
//!
//! let options = ExtractOptions::default();
//! let page = PageDocument::load(Path::new("content/s/article/alerts/index.html"), &options)?;
//!
//! match extract_article(&page, &options) {
//!     Ok(record) => println!("{}", serde_json::to_string_pretty(&record).unwrap()),
//!     Err(e) => eprintln!("could not map fields: {}", e),
//! }
//! # Ok::<(), helpcenter_extract::ExtractError>(())
//! ```
//!
//! ## Error Handling
//!
//! Loading fails loudly with [`ExtractError::NotFound`] or
//! [`ExtractError::MissingRegion`] when a download is missing or incomplete.
//! Field mapping fails with a [`FieldError`] naming the field at fault. The
//! batch driver records both and carries on with the next page.

mod article;
mod batch;
mod document;
mod error;
mod extractor;
mod fields;
mod normalize;
mod options;
mod page_url;
mod scanner;
mod title;

// Public exports
pub use article::{ArticleMetadata, ArticleRecord};
pub use batch::{process_directory, process_file, BatchReport, FileOutcome};
pub use document::PageDocument;
pub use error::{ExtractError, FieldError, Result};
pub use extractor::{assemble_record, extract_article, parse_date, parse_view_count};
pub use fields::{canonicalize_label, collect_form_fields, FieldKey};
pub use normalize::{normalize_text, tidy_lines};
pub use options::{
    ExtractOptions, ExtractOptionsBuilder, DEFAULT_BASE_URL, DEFAULT_DATE_FORMATS,
    DEFAULT_DENY_LIST,
};
pub use page_url::{article_url, derive_url, parse_base_url};
pub use scanner::scan_directory;
pub use title::{
    extract_description, extract_title, find_description, find_title, TitleNode, HOME_TITLE,
};
