//! Link extraction from HTML documents

use crate::url::{normalize_link, strip_trailing_slash};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the set of crawlable links from an HTML document.
///
/// Every `<a href>` is trimmed and normalized against `base`; duplicates
/// collapse on the normalized form and the page's own URL is removed, so
/// the result never contains a self-link. The parser's error recovery
/// absorbs malformed or truncated HTML, yielding whatever anchors were
/// readable. Order of the returned links is unspecified.
pub fn extract_links(base: &Url, body: &[u8]) -> Vec<String> {
    let html = String::from_utf8_lossy(body);
    let document = Html::parse_document(&html);

    let mut found = HashSet::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(link) = normalize_link(base, href) {
                    found.insert(link);
                }
            }
        }
    }

    found.remove(strip_trailing_slash(base.as_str()));

    found.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost.com").unwrap()
    }

    #[test]
    fn test_host_filtering() {
        let html = br#"
            <ul>
                <a href="/">Home</a>
                <a href="/advanced-features">Advanced features</a>
                <a href="/pricing">Pricing</a>
                <a href="/demo?url=staging">Demo</a>
                <a href="https://google.com"> External </a>
                <a href="mailto:someone@example.com">Send email</a>
                <a href="#">Go Home</a>
            </ul>"#;

        let mut links = extract_links(&base(), html);
        links.sort();

        assert_eq!(
            links,
            vec![
                "http://localhost.com/advanced-features",
                "http://localhost.com/demo",
                "http://localhost.com/pricing",
            ]
        );
    }

    #[test]
    fn test_self_link_excluded() {
        let html = br#"<a href="/">Home</a><a href="http://localhost.com/">Also home</a>"#;
        assert!(extract_links(&base(), html).is_empty());
    }

    #[test]
    fn test_self_link_excluded_for_subpage_base() {
        let page = Url::parse("http://localhost.com/docs/").unwrap();
        let html = br#"<a href="/docs">This page</a><a href="/docs/intro">Intro</a>"#;

        let links = extract_links(&page, html);
        assert_eq!(links, vec!["http://localhost.com/docs/intro"]);
    }

    #[test]
    fn test_duplicate_links_collapse() {
        let html = br#"
            <a href="/pricing">Pricing</a>
            <a href="/pricing/">Pricing again</a>
            <a href="/pricing?ref=footer">Pricing once more</a>"#;

        let links = extract_links(&base(), html);
        assert_eq!(links, vec!["http://localhost.com/pricing"]);
    }

    #[test]
    fn test_anchor_without_href_ignored() {
        let html = br#"<a name="top">Anchor</a><a href="/pricing">Pricing</a>"#;
        assert_eq!(extract_links(&base(), html).len(), 1);
    }

    #[test]
    fn test_truncated_html_still_yields_links() {
        let html = br#"<html><body><a href="/pricing">Pricing</a><div><a href="/demo"#;
        let links = extract_links(&base(), html);
        assert_eq!(links, vec!["http://localhost.com/pricing"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_links(&base(), b"").is_empty());
    }

    #[test]
    fn test_href_whitespace_trimmed() {
        let html = br#"<a href="  /pricing  ">Pricing</a>"#;
        let links = extract_links(&base(), html);
        assert_eq!(links, vec!["http://localhost.com/pricing"]);
    }
}
