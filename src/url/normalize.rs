use url::Url;

/// Normalizes a candidate href into a crawl target, or rejects it.
///
/// Rejected outright: empty hrefs, `mailto:` links, and same-page fragments.
/// Relative references are resolved against `base`; absolute links survive
/// only when their host matches the base host, since cross-host crawling is
/// out of scope. The query string is cleared, so distinct queries on one
/// path collapse into the same target, and trailing slashes are stripped
/// from the final string form.
///
/// Hrefs that fail to parse are dropped with a diagnostic.
pub fn normalize_link(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with("mailto:") || href.starts_with('#') {
        return None;
    }

    let mut resolved = match base.join(href) {
        Ok(url) => url,
        Err(err) => {
            tracing::debug!("invalid URL {:?}: {}", href, err);
            return None;
        }
    };

    if resolved.host_str() != base.host_str() {
        return None;
    }

    resolved.set_query(None);

    Some(strip_trailing_slash(resolved.as_str()).to_string())
}

/// Strips every trailing `/` from a URL string form.
///
/// Applied to extracted links and to the page's own URL alike, so the
/// self-link comparison in the extractor always sees identical forms.
pub fn strip_trailing_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}
