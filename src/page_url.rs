//! URL construction for saved pages and articles.

use crate::error::{ExtractError, Result};
use url::Url;

/// Parse and validate a base URL.
pub fn parse_base_url(input: &str) -> Result<Url> {
    Url::parse(input).map_err(|_| ExtractError::InvalidUrl(input.to_string()))
}

/// Public URL of a saved page from its flattened file name.
///
/// Underscores in `relative_path` stand for path separators. The joined URL
/// loses its `/content` prefix and `/index.html` suffix.
///
/// ```rust
/// use helpcenter_extract::{derive_url, parse_base_url};
///
/// let base = parse_base_url("https://domo-support.domo.com").unwrap();
/// assert_eq!(
///     derive_url("content_s_article_Beast-Mode_index.html", &base).unwrap(),
///     "https://domo-support.domo.com/s/article/Beast-Mode"
/// );
/// ```
pub fn derive_url(relative_path: &str, base_url: &Url) -> Result<String> {
    let relative = relative_path.replace('_', "/");
    let joined = base_url
        .join(&relative)
        .map_err(|_| ExtractError::InvalidUrl(relative.clone()))?;

    let mut path = remove_segment(joined.path(), "/content");
    if let Some(stripped) = path.strip_suffix("/index.html") {
        path = stripped.to_string();
    }

    Ok(format!("{}{}", joined.origin().ascii_serialization(), path))
}

/// Remove the first occurrence of `segment` that sits on segment boundaries.
fn remove_segment(path: &str, segment: &str) -> String {
    let mut from = 0;
    while let Some(offset) = path[from..].find(segment) {
        let start = from + offset;
        let end = start + segment.len();
        if path[end..].is_empty() || path[end..].starts_with('/') {
            return format!("{}{}", &path[..start], &path[end..]);
        }
        from = end;
    }
    path.to_string()
}

/// Article URL for a `url_name` slug.
pub fn article_url(base_url: &Url, url_name: &str) -> String {
    format!("{}/s/article/{}", base_url.as_str().trim_end_matches('/'), url_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_base_url("https://help.example.com").unwrap()
    }

    #[test]
    fn flattened_path_becomes_page_url() {
        assert_eq!(
            derive_url("content_foo_bar_index.html", &base()).unwrap(),
            "https://help.example.com/foo/bar"
        );
    }

    #[test]
    fn plain_relative_path() {
        assert_eq!(
            derive_url("content/s/topic/abc/index.html", &base()).unwrap(),
            "https://help.example.com/s/topic/abc"
        );
    }

    #[test]
    fn root_index_maps_to_site_root() {
        assert_eq!(derive_url("content_index.html", &base()).unwrap(), "https://help.example.com");
    }

    #[test]
    fn article_url_has_single_slash() {
        assert_eq!(
            article_url(&base(), "my-article"),
            "https://help.example.com/s/article/my-article"
        );
        let nested = parse_base_url("https://help.example.com/kb/").unwrap();
        assert_eq!(
            article_url(&nested, "x"),
            "https://help.example.com/kb/s/article/x"
        );
    }

    #[test]
    fn content_must_be_a_whole_segment() {
        assert_eq!(
            derive_url("contents_guide_index.html", &base()).unwrap(),
            "https://help.example.com/contents/guide"
        );
        let host = parse_base_url("https://content.example.com").unwrap();
        assert_eq!(
            derive_url("content_a_index.html", &host).unwrap(),
            "https://content.example.com/a"
        );
    }

    #[test]
    fn invalid_base() {
        assert!(matches!(parse_base_url("no scheme"), Err(ExtractError::InvalidUrl(_))));
    }
}
