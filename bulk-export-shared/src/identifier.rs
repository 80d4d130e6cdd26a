//! Document identifier extraction from wiki-style URLs.

/// Marker preceding the page title in a wiki URL.
pub const WIKI_MARKER: &str = "/wiki/";

/// Return everything after the first `/wiki/` in `wiki_url`.
///
/// The page title is returned as found, still URL-encoded. No title
/// canonicalization (casing, namespace stripping) is applied.
///
/// Returns `None` if the URL does not contain the marker.
pub fn uri_ending(wiki_url: &str) -> Option<&str> {
    wiki_url
        .find(WIKI_MARKER)
        .map(|start| &wiki_url[start + WIKI_MARKER.len()..])
}
