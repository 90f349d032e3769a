//! Ordered table of legacy path aliases.
//!
//! Each rule pairs a [`Matcher`] with a [`Rewrite`]. Rules are tried in
//! order against the candidate pathname (with one leading `/` removed) and the
//! first match wins. New legacy aliases are added as new rows.

use serde::{Deserialize, Serialize};

/// Which candidate pathnames a rule applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Matcher {
    /// `prefix/<rest>`: the prefix followed by `/` and anything.
    SegmentPrefix(String),
    /// Exactly this path, no trailing segment.
    Exact(String),
}

/// What a matching pathname becomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rewrite {
    /// Swap the matched prefix, keeping `<rest>`.
    ReplacePrefix(String),
    /// Replace the whole pathname.
    To(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRule {
    pub matcher: Matcher,
    pub rewrite: Rewrite,
}

impl AliasRule {
    pub fn new(matcher: Matcher, rewrite: Rewrite) -> Self {
        Self { matcher, rewrite }
    }

    /// Rewrites `path` (no leading `/`) if this rule matches it.
    pub fn apply(&self, path: &str) -> Option<String> {
        let rest = match &self.matcher {
            Matcher::SegmentPrefix(prefix) => {
                Some(path.strip_prefix(prefix.as_str())?.strip_prefix('/')?)
            }
            Matcher::Exact(exact) if path == exact.as_str() => None,
            Matcher::Exact(_) => return None,
        };
        let out = match (&self.rewrite, rest) {
            (Rewrite::ReplacePrefix(to), Some(rest)) => format!("{to}/{rest}"),
            (Rewrite::ReplacePrefix(to), None) => to.clone(),
            (Rewrite::To(to), _) => to.clone(),
        };
        Some(out)
    }
}

/// Ordered alias rules; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
}

impl AliasTable {
    /// A table with exactly the given rules, in order.
    pub fn new(rules: Vec<AliasRule>) -> Self {
        Self { rules }
    }

    /// The aliases retired by the move to path-based routing:
    /// `shopper-dashboard/<id>` became `store/<id>`, and both the bare
    /// `shopper-dashboard` and the old `landing` page now live at `/`.
    pub fn builtin() -> Self {
        Self::new(vec![
            AliasRule::new(
                Matcher::SegmentPrefix("shopper-dashboard".into()),
                Rewrite::ReplacePrefix("store".into()),
            ),
            AliasRule::new(
                Matcher::Exact("shopper-dashboard".into()),
                Rewrite::To("/".into()),
            ),
            AliasRule::new(Matcher::Exact("landing".into()), Rewrite::To("/".into())),
        ])
    }

    /// Built-in rules followed by `extra`.
    pub fn with_extra(extra: impl IntoIterator<Item = AliasRule>) -> Self {
        let mut table = Self::builtin();
        table.rules.extend(extra);
        table
    }

    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    /// Applies the first matching rule to `pathname`. Unmatched paths are returned as-is.
    pub fn rewrite(&self, pathname: &str) -> String {
        let bare = pathname.strip_prefix('/').unwrap_or(pathname);
        self.rules
            .iter()
            .find_map(|rule| rule.apply(bare))
            .unwrap_or_else(|| pathname.to_string())
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}
