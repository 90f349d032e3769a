//! Fragment-to-path translation.

use super::alias::AliasTable;
use super::location::CanonicalRoute;

/// Translates a legacy hash fragment into a canonical route.
///
/// Returns `None` for an empty fragment or a bare `#`. Anything else yields a
/// route: the fragment is split on its first `?`, the path part goes through
/// `aliases`, and a leading `/` is added if missing. Later `?` characters stay
/// in the search verbatim.
pub fn translate_fragment(fragment: &str, aliases: &AliasTable) -> Option<CanonicalRoute> {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    if raw.is_empty() {
        return None;
    }

    let (path, search) = match raw.find('?') {
        Some(idx) => (&raw[..idx], Some(raw[idx..].to_string())),
        None => (raw, None),
    };

    let rewritten = aliases.rewrite(path);
    let pathname = if rewritten.starts_with('/') {
        rewritten
    } else {
        format!("/{rewritten}")
    };

    Some(CanonicalRoute::new(pathname, search))
}
