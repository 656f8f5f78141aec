//! Form field discovery and label canonicalization.
//!
//! Article pages lay their metadata out as Lightning `slds-form` blocks, each
//! holding `slds-form-element` label/control pairs. Labels become canonical
//! keys; controls become normalized Markdown values.

use crate::normalize::normalize_text;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

static FORM: Lazy<Selector> = Lazy::new(|| Selector::parse(".slds-form").unwrap());
static FORM_ELEMENT: Lazy<Selector> = Lazy::new(|| Selector::parse(".slds-form-element").unwrap());
static LABEL: Lazy<Selector> = Lazy::new(|| Selector::parse(".slds-form-element__label").unwrap());
static CONTROL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".slds-form-element__control").unwrap());

/// Canonical keys the record assembler handles specially.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// Article body, becomes `page_content`
    ArticleBody,
    /// URL slug, replaced by a full `url`
    UrlName,
    /// Comma-grouped view count
    ArticleTotalViewCount,
    /// Publication date in the site's display format
    FirstPublishedDate,
    /// Passed through to metadata unchanged
    Other(String),
}

impl FieldKey {
    pub const ARTICLE_BODY: &'static str = "article_body";
    pub const URL_NAME: &'static str = "url_name";
    pub const ARTICLE_TOTAL_VIEW_COUNT: &'static str = "article_total_view_count";
    pub const FIRST_PUBLISHED_DATE: &'static str = "first_published_date";

    /// Classify a canonical key
    pub fn from_key(key: &str) -> Self {
        match key {
            Self::ARTICLE_BODY => FieldKey::ArticleBody,
            Self::URL_NAME => FieldKey::UrlName,
            Self::ARTICLE_TOTAL_VIEW_COUNT => FieldKey::ArticleTotalViewCount,
            Self::FIRST_PUBLISHED_DATE => FieldKey::FirstPublishedDate,
            other => FieldKey::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldKey::ArticleBody => Self::ARTICLE_BODY,
            FieldKey::UrlName => Self::URL_NAME,
            FieldKey::ArticleTotalViewCount => Self::ARTICLE_TOTAL_VIEW_COUNT,
            FieldKey::FirstPublishedDate => Self::FIRST_PUBLISHED_DATE,
            FieldKey::Other(key) => key,
        }
    }
}

/// Turn a human-readable label into a snake_case, filesystem-safe key.
///
/// Whitespace, hyphens and underscores separate words; every other
/// non-alphanumeric character is dropped without leaving a separator.
///
/// ```rust
/// use helpcenter_extract::canonicalize_label;
///
/// assert_eq!(canonicalize_label("  URL Name "), "url_name");
/// assert_eq!(canonicalize_label("Summary(Briefly describe it.)"), "summarybriefly_describe_it");
/// ```
pub fn canonicalize_label(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    let mut pending_separator = false;

    for c in label.trim().chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = !key.is_empty();
        } else if c.is_alphanumeric() {
            if pending_separator {
                key.push('_');
                pending_separator = false;
            }
            key.extend(c.to_lowercase());
        }
    }

    key
}

/// Collect every label/control pair under every form in the content region.
///
/// Elements missing a label or control are skipped. When two labels
/// canonicalize to the same key the later value wins.
pub fn collect_form_fields(content: &Html) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();

    for form in content.select(&FORM) {
        for element in form.select(&FORM_ELEMENT) {
            if let Some((key, value)) = read_form_element(element) {
                fields.insert(key, value);
            }
        }
    }

    fields
}

fn read_form_element(element: ElementRef<'_>) -> Option<(String, String)> {
    let label = element.select(&LABEL).next()?;
    let control = element.select(&CONTROL).next()?;

    let key = canonicalize_label(&label.text().collect::<String>());
    let value = normalize_text(&control.html()).trim().to_string();
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_DENY_LIST;

    #[test]
    fn canonical_keys() {
        assert_eq!(canonicalize_label("Article Total View Count"), "article_total_view_count");
        assert_eq!(canonicalize_label("First Published Date"), "first_published_date");
        assert_eq!(canonicalize_label("Article  Body\n"), "article_body");
        assert_eq!(canonicalize_label("Sub-Category / Area"), "sub_category_area");
        assert_eq!(canonicalize_label("***"), "");
        assert_eq!(canonicalize_label(""), "");
    }

    #[test]
    fn long_summary_label_matches_deny_list_entry() {
        let label = "Summary(Briefly describe the article. The summary is used in search results \
            to help users find relevant articles. You can improve the accuracy of search results \
            by including phrases that your customers use to describe this issue or topic.)";
        assert_eq!(canonicalize_label(label), DEFAULT_DENY_LIST[1]);
    }

    #[test]
    fn field_key_table() {
        assert_eq!(FieldKey::from_key("url_name"), FieldKey::UrlName);
        assert_eq!(FieldKey::from_key("article_body"), FieldKey::ArticleBody);
        assert_eq!(
            FieldKey::from_key("article_number"),
            FieldKey::Other("article_number".to_string())
        );
        assert_eq!(FieldKey::FirstPublishedDate.as_str(), "first_published_date");
    }

    #[test]
    fn collects_pairs_from_all_forms() {
        let html = Html::parse_fragment(
            r#"
            <div class="slds-form">
              <div class="slds-form-element">
                <span class="slds-form-element__label">URL Name</span>
                <div class="slds-form-element__control"><span>my-article</span></div>
              </div>
              <div class="slds-form-element">
                <span class="slds-form-element__label">No control here</span>
              </div>
            </div>
            <div class="slds-form">
              <div class="slds-form-element">
                <span class="slds-form-element__label">Article Number</span>
                <div class="slds-form-element__control"><a href="/x">000001234</a></div>
              </div>
            </div>
            <div class="slds-form-element">
              <span class="slds-form-element__label">Outside</span>
              <div class="slds-form-element__control">ignored</div>
            </div>
            "#,
        );

        let fields = collect_form_fields(&html);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["url_name"], "my-article");
        assert_eq!(fields["article_number"], "000001234");
    }
}
