//! HTML to Markdown normalization for article bodies and field values.

use htmd::HtmlToMarkdown;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node};

static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static MARKUP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^\\])</?[A-Za-z][^<>]*>").unwrap());

static CONVERTER: Lazy<HtmlToMarkdown> = Lazy::new(|| {
    HtmlToMarkdown::builder()
        .skip_tags(vec!["head", "script", "style"])
        .build()
});

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Convert a fragment of markup to normalized Markdown.
///
/// Links are reduced to their text and images are dropped, so no link target
/// or image source survives. Trailing whitespace is removed from every line
/// and runs of blank lines collapse to a single blank line. Every `<` in the
/// converted text is escaped as `\<`, so decoded entities such as `&lt;div&gt;`
/// never read as markup again.
///
/// Input without any unescaped tags is treated as already converted and only
/// goes through [`tidy_lines`], which keeps the function idempotent.
///
/// ```rust
/// use helpcenter_extract::normalize_text;
///
/// let text = normalize_text(r#"<p>See <a href="https://x.test/doc">the guide</a>.</p><img src="a.png">"#);
/// assert!(text.contains("See the guide."));
/// assert!(!text.contains("x.test"));
/// assert!(!text.contains("a.png"));
/// assert_eq!(normalize_text(&text), text);
/// ```
pub fn normalize_text(markup: &str) -> String {
    if !MARKUP_TAG.is_match(markup) {
        return tidy_lines(markup);
    }

    let stripped = strip_links_and_images(markup);
    let markdown = CONVERTER
        .convert(&stripped)
        .unwrap_or_else(|_| plain_text(&stripped));

    tidy_lines(&escape_angle_brackets(&markdown))
}

/// Strip trailing whitespace from each line and collapse blank-line runs.
///
/// Every line, including the last, ends with `\n`. Applying it twice gives
/// the same result as applying it once.
pub fn tidy_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    for line in text.lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    BLANK_RUN.replace_all(&out, "\n\n").into_owned()
}

/// Re-serialize `markup` with `<a>` elements unwrapped and `<img>` removed.
fn strip_links_and_images(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    let mut out = String::with_capacity(markup.len());
    write_children(fragment.root_element(), &mut out);
    out
}

fn write_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            write_element(child_element, out);
        } else if let Node::Text(text) = child.value() {
            escape_into(text, false, out);
        }
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    match name {
        "img" => {}
        "a" => write_children(element, out),
        _ => {
            out.push('<');
            out.push_str(name);
            for (attr, value) in element.value().attrs() {
                out.push(' ');
                out.push_str(attr);
                out.push_str("=\"");
                escape_into(value, true, out);
                out.push('"');
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&name) {
                return;
            }
            write_children(element, out);
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Prefix every `<` not already escaped with a backslash.
fn escape_angle_brackets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous = None;
    for c in text.chars() {
        if c == '<' && previous != Some('\\') {
            out.push('\\');
        }
        out.push(c);
        previous = Some(c);
    }
    out
}

fn plain_text(markup: &str) -> String {
    Html::parse_fragment(markup).root_element().text().collect()
}
