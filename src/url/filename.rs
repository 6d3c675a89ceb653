/// Derives the on-disk cache filename for a raw URL.
///
/// Each maximal run of non-alphanumeric characters collapses into a single
/// `_`, so `http://example.com/a` becomes `http_example_com_a`. Distinct
/// URLs that differ only in folded characters collide; the cache accepts
/// that as a known limitation.
pub fn cache_filename(raw_url: &str) -> String {
    let mut name = String::with_capacity(raw_url.len());
    let mut in_run = false;

    for c in raw_url.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c);
            in_run = false;
        } else if !in_run {
            name.push('_');
            in_run = true;
        }
    }

    name
}
