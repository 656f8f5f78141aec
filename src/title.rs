//! Title and description lookup within a content region.
//!
//! Each lookup comes in a raw form, returning the located element, and a
//! processed form returning trimmed text.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static PAGE_HEADER: Lazy<Selector> = Lazy::new(|| Selector::parse(".page-header").unwrap());
static ARTICLE_HEAD: Lazy<Selector> = Lazy::new(|| Selector::parse(".article-head").unwrap());
static HOME_BROWSE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".homePage_BrowseResources").unwrap());
static PAGE_HEADER_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".page-header-description").unwrap());

/// Title text used for the help-center landing page.
pub const HOME_TITLE: &str = "Home";

/// Where a page title was found.
#[derive(Debug, Clone, Copy)]
pub enum TitleNode<'a> {
    /// The page is the landing page and carries no title markup
    Home,
    /// Heading or article-head element holding the title
    Element(ElementRef<'a>),
}

impl TitleNode<'_> {
    /// Trimmed title text, [`HOME_TITLE`] for the landing page.
    pub fn text(&self) -> String {
        match self {
            TitleNode::Home => HOME_TITLE.to_string(),
            TitleNode::Element(element) => element.text().collect::<String>().trim().to_string(),
        }
    }
}

/// Locate the title element.
///
/// The first `h1` following the page header wins; otherwise the article
/// head. A landing page with neither resolves to [`TitleNode::Home`].
pub fn find_title(content: &Html) -> Option<TitleNode<'_>> {
    let located = content
        .select(&PAGE_HEADER)
        .next()
        .and_then(|header| next_heading(content, header))
        .or_else(|| content.select(&ARTICLE_HEAD).next());

    match located {
        Some(element) => Some(TitleNode::Element(element)),
        None if content.select(&HOME_BROWSE).next().is_some() => Some(TitleNode::Home),
        None => None,
    }
}

/// Trimmed page title, or `None` when no title markup exists.
pub fn extract_title(content: &Html) -> Option<String> {
    find_title(content).map(|node| node.text())
}

/// Locate the page header description element.
pub fn find_description(content: &Html) -> Option<ElementRef<'_>> {
    content.select(&PAGE_HEADER_DESCRIPTION).next()
}

/// Trimmed description text; absent or blank descriptions are `None`.
pub fn extract_description(content: &Html) -> Option<String> {
    let text = find_description(content)?.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// First `h1` after `start` in document order, descendants included.
fn next_heading<'a>(content: &'a Html, start: ElementRef<'a>) -> Option<ElementRef<'a>> {
    content
        .root_element()
        .descendants()
        .skip_while(|node| node.id() != start.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "h1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_after_page_header() {
        let html = Html::parse_fragment(
            r#"<h1>Too early</h1>
            <div class="page-header"><span>Knowledge Base</span></div>
            <section><h1>  Configuring Alerts </h1></section>"#,
        );
        assert_eq!(extract_title(&html).as_deref(), Some("Configuring Alerts"));
    }

    #[test]
    fn heading_inside_page_header() {
        let html = Html::parse_fragment(r#"<div class="page-header"><h1>Inside</h1></div>"#);
        assert_eq!(extract_title(&html).as_deref(), Some("Inside"));
    }

    #[test]
    fn falls_back_to_article_head() {
        let html = Html::parse_fragment(
            r#"<div class="page-header">no heading</div><div class="article-head"> Beast Mode </div>"#,
        );
        assert_eq!(extract_title(&html).as_deref(), Some("Beast Mode"));
    }

    #[test]
    fn landing_page_is_home() {
        let html = Html::parse_fragment(r#"<div class="homePage_BrowseResources">tiles</div>"#);
        assert!(matches!(find_title(&html), Some(TitleNode::Home)));
        assert_eq!(extract_title(&html).as_deref(), Some(HOME_TITLE));
    }

    #[test]
    fn landing_page_with_title_keeps_title() {
        let html = Html::parse_fragment(
            r#"<div class="homePage_BrowseResources"></div><div class="article-head">Welcome</div>"#,
        );
        assert_eq!(extract_title(&html).as_deref(), Some("Welcome"));
    }

    #[test]
    fn no_title_markup() {
        let html = Html::parse_fragment("<p>body only</p>");
        assert!(find_title(&html).is_none());
        assert!(extract_title(&html).is_none());
    }

    #[test]
    fn raw_title_returns_element() {
        let html = Html::parse_fragment(r#"<div class="article-head">Raw</div>"#);
        match find_title(&html) {
            Some(TitleNode::Element(element)) => assert_eq!(element.value().name(), "div"),
            other => panic!("unexpected title node: {:?}", other),
        }
    }

    #[test]
    fn description_present_blank_or_absent() {
        let present = Html::parse_fragment(r#"<p class="page-header-description"> Short summary </p>"#);
        assert_eq!(extract_description(&present).as_deref(), Some("Short summary"));
        assert!(find_description(&present).is_some());

        let blank = Html::parse_fragment(r#"<p class="page-header-description">   </p>"#);
        assert!(find_description(&blank).is_some());
        assert_eq!(extract_description(&blank), None);

        let absent = Html::parse_fragment("<p>nothing</p>");
        assert_eq!(extract_description(&absent), None);
    }
}
