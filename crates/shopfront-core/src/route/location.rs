//! Browser location and canonical route types.

use std::fmt;

use anyhow::{Context, Result};

/// Base for resolving path-relative hrefs; only its path/query/fragment survive.
const RELATIVE_BASE: &str = "http://localhost/";

/// The current browser location as seen on page load, split the way the
/// `window.location` object exposes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyUrl {
    /// Raw text after `#`, without the `#` itself.
    pub fragment: String,
    /// Empty or starting with `/`.
    pub pathname: String,
    /// Starting with `?` when present; an empty query is `None`.
    pub search: Option<String>,
}

impl LegacyUrl {
    /// Builds a location from its parts, normalizing the pathname and search.
    ///
    /// `fragment` is kept verbatim (it is the text after the delimiter, so a
    /// leading `#` is part of the content). A pathname without a leading `/`
    /// gets one, and a search without a leading `?` gets one.
    pub fn new(fragment: &str, pathname: &str, search: Option<&str>) -> Self {
        let fragment = fragment.to_string();
        let pathname = if pathname.is_empty() || pathname.starts_with('/') {
            pathname.to_string()
        } else {
            format!("/{pathname}")
        };
        let search = search
            .map(|s| s.strip_prefix('?').unwrap_or(s))
            .filter(|s| !s.is_empty())
            .map(|s| format!("?{s}"));
        Self {
            fragment,
            pathname,
            search,
        }
    }

    /// Parses a location from an href.
    ///
    /// Accepts an absolute URL (`https://shop.example/#store/1`), a
    /// path-relative href (`/app?x=1#store/1`) or a bare fragment (`#store/1`,
    /// treated as a location at `/`). Exactly one `#` delimiter is removed.
    pub fn parse(href: &str) -> Result<Self> {
        let href = href.trim();
        if href.is_empty() {
            return Ok(Self::new("", "/", None));
        }
        if let Some(fragment) = href.strip_prefix('#') {
            return Ok(Self::new(fragment, "/", None));
        }
        let parsed = match url::Url::parse(href) {
            Ok(parsed) => parsed,
            Err(url::ParseError::RelativeUrlWithoutBase)
                if href.starts_with('/') || href.starts_with('?') =>
            {
                url::Url::parse(RELATIVE_BASE)
                    .and_then(|base| base.join(href))
                    .with_context(|| format!("invalid location: {href}"))?
            }
            Err(e) => return Err(e).with_context(|| format!("invalid location: {href}")),
        };
        Ok(Self::new(
            parsed.fragment().unwrap_or(""),
            parsed.path(),
            parsed.query(),
        ))
    }

    /// True when the location carries a fragment worth translating.
    pub fn has_fragment(&self) -> bool {
        !self.fragment.is_empty()
    }
}

/// A path-based route produced from a legacy fragment. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRoute {
    pathname: String,
    search: Option<String>,
}

impl CanonicalRoute {
    pub(crate) fn new(pathname: String, search: Option<String>) -> Self {
        debug_assert!(pathname.starts_with('/'));
        Self { pathname, search }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }
}

impl fmt::Display for CanonicalRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pathname, self.search.as_deref().unwrap_or(""))
    }
}
