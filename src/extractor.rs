//! Mapping of a page's form fields into an [`ArticleRecord`].
//!
//! [`extract_article`] reads the content region, [`assemble_record`] turns the
//! resulting key/value map into the final record. Assembly steps, in order:
//!
//! 1. `article_body` becomes `page_content`
//! 2. denied keys and empty values are dropped
//! 3. `url_name` is replaced by a full article `url`
//! 4. `article_total_view_count` loses its separators and becomes an integer
//! 5. `first_published_date` is reformatted as `YYYY-MM-DD`
//!
//! Steps 1, 3, 4 and 5 fail with [`FieldError::MissingField`] when their
//! field is absent or blank.
//! 6. description and title are attached

use crate::article::{ArticleMetadata, ArticleRecord, RESERVED_KEYS};
use crate::document::PageDocument;
use crate::error::FieldError;
use crate::fields::{collect_form_fields, FieldKey};
use crate::options::ExtractOptions;
use crate::page_url::article_url;
use crate::title::{extract_description, extract_title};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::result::Result;

/// Extract the article record of a loaded page.
///
/// ## Example
///
/// ```rust
/// use helpcenter_extract::{extract_article, ExtractOptions, PageDocument};
///
/// let html = r#"
/// <div class="content">
///   <div class="article-head">Alerts</div>
///   <div class="slds-form">
///     <div class="slds-form-element">
///       <span class="slds-form-element__label">Article Body</span>
///       <div class="slds-form-element__control"><p>Body text</p></div>
///     </div>
///     <div class="slds-form-element">
///       <span class="slds-form-element__label">URL Name</span>
///       <div class="slds-form-element__control">alerts</div>
///     </div>
///     <div class="slds-form-element">
///       <span class="slds-form-element__label">Article Total View Count</span>
///       <div class="slds-form-element__control">2,048</div>
///     </div>
///     <div class="slds-form-element">
///       <span class="slds-form-element__label">First Published Date</span>
///       <div class="slds-form-element__control">3/7/2021</div>
///     </div>
///   </div>
/// </div>"#;
///
/// let options = ExtractOptions::default();
/// let page = PageDocument::from_html(html, "alerts/index.html", &options).unwrap();
/// let record = extract_article(&page, &options).unwrap();
///
/// assert_eq!(record.page_content, "Body text");
/// assert_eq!(record.metadata.url, "https://domo-support.domo.com/s/article/alerts");
/// assert_eq!(record.metadata.article_total_view_count, Some(2048));
/// ```
pub fn extract_article(
    page: &PageDocument,
    options: &ExtractOptions,
) -> Result<ArticleRecord, FieldError> {
    let content = page.content();
    let fields = collect_form_fields(content);
    let title = extract_title(content).ok_or(FieldError::MissingTitle)?;
    let description = extract_description(content);

    assemble_record(fields, title, description, options)
}

/// Build a record from canonical form fields.
///
/// `article_body` is taken before filtering, so an empty body is kept. Every
/// other key goes through the deny-list and empty-value filter first; the
/// URL name, view count and publication date are then required.
pub fn assemble_record(
    fields: BTreeMap<String, String>,
    title: String,
    description: Option<String>,
    options: &ExtractOptions,
) -> Result<ArticleRecord, FieldError> {
    let mut page_content = None;
    let mut url_name = None;
    let mut view_count = None;
    let mut published = None;
    let mut passthrough = BTreeMap::new();

    for (key, value) in fields {
        match FieldKey::from_key(&key) {
            FieldKey::ArticleBody => page_content = Some(value),
            _ if options.is_denied(&key) || value.is_empty() => {}
            FieldKey::UrlName => url_name = Some(value),
            FieldKey::ArticleTotalViewCount => view_count = Some(value),
            FieldKey::FirstPublishedDate => published = Some(value),
            FieldKey::Other(key) => {
                if !RESERVED_KEYS.contains(&key.as_str()) {
                    passthrough.insert(key, value);
                }
            }
        }
    }

    let page_content = required(page_content, FieldKey::ARTICLE_BODY)?;
    let url = article_url(
        &options.base_url,
        &required(url_name, FieldKey::URL_NAME)?,
    );
    let article_total_view_count =
        parse_view_count(&required(view_count, FieldKey::ARTICLE_TOTAL_VIEW_COUNT)?)?;
    let first_published_date = parse_date(
        &required(published, FieldKey::FIRST_PUBLISHED_DATE)?,
        &options.date_formats,
    )?;

    Ok(ArticleRecord {
        page_content,
        metadata: ArticleMetadata {
            title,
            description,
            url,
            article_total_view_count: Some(article_total_view_count),
            first_published_date: Some(first_published_date),
            fields: passthrough,
        },
    })
}

/// Parse a comma-grouped count such as `1,234`.
pub fn parse_view_count(value: &str) -> Result<u64, FieldError> {
    value
        .replace(',', "")
        .trim()
        .parse()
        .map_err(|_| FieldError::InvalidCount {
            value: value.to_string(),
        })
}

/// Parse a date with the first matching format.
pub fn parse_date(value: &str, formats: &[String]) -> Result<NaiveDate, FieldError> {
    let trimmed = value.trim();
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| FieldError::InvalidDate {
            value: value.to_string(),
        })
}

fn required(value: Option<String>, key: &'static str) -> Result<String, FieldError> {
    value.ok_or(FieldError::MissingField(key))
}
