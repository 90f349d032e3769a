//! One-shot legacy location migration on page load.

use crate::config::RuntimeMode;

use super::alias::AliasTable;
use super::location::{CanonicalRoute, LegacyUrl};
use super::translate::translate_fragment;

/// Options for [`Navigator::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigateOptions {
    pub fn replace() -> Self {
        Self { replace: true }
    }

    pub fn push() -> Self {
        Self { replace: false }
    }
}

/// The navigation layer the redirect drives (browser history plus router).
pub trait Navigator {
    /// Overwrite the current history entry in place, without a transition.
    fn replace_entry(&mut self, pathname: &str, search: Option<&str>);

    /// Transition the router to `route`.
    fn navigate(&mut self, route: &CanonicalRoute, options: NavigateOptions);
}

/// One call recorded by [`HistoryLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    ReplaceEntry { href: String },
    Navigate { href: String, replace: bool },
}

/// A [`Navigator`] that only records what it was asked to do.
#[derive(Debug, Default)]
pub struct HistoryLog {
    events: Vec<HistoryEvent>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[HistoryEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Navigator for HistoryLog {
    fn replace_entry(&mut self, pathname: &str, search: Option<&str>) {
        self.events.push(HistoryEvent::ReplaceEntry {
            href: format!("{pathname}{}", search.unwrap_or("")),
        });
    }

    fn navigate(&mut self, route: &CanonicalRoute, options: NavigateOptions) {
        self.events.push(HistoryEvent::Navigate {
            href: route.to_string(),
            replace: options.replace,
        });
    }
}

/// Rewrites a legacy `#...` location into its path-based equivalent.
#[derive(Debug, Clone)]
pub struct LegacyRedirect {
    aliases: AliasTable,
    mode: RuntimeMode,
}

impl LegacyRedirect {
    pub fn new(aliases: AliasTable, mode: RuntimeMode) -> Self {
        Self { aliases, mode }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Migrates `location` if it carries a legacy fragment.
    ///
    /// The current history entry is first overwritten with the location's own
    /// pathname and search (dropping the fragment), then the navigator is sent
    /// to the translated route in replace mode, so the legacy URL never remains
    /// as a back-button stop. Returns the route navigated to, or `None` (and
    /// touches nothing) when there is no fragment.
    pub fn run<N: Navigator>(
        &self,
        location: &LegacyUrl,
        navigator: &mut N,
    ) -> Option<CanonicalRoute> {
        if !location.has_fragment() {
            return None;
        }
        let hash = format!("#{}", location.fragment);
        let route = translate_fragment(&hash, &self.aliases)?;

        if self.mode.is_development() {
            tracing::debug!(from = %hash, to = %route, "translated legacy route");
        }

        navigator.replace_entry(&location.pathname, location.search.as_deref());
        navigator.navigate(&route, NavigateOptions::replace());
        Some(route)
    }
}

impl Default for LegacyRedirect {
    fn default() -> Self {
        Self::new(AliasTable::builtin(), RuntimeMode::default())
    }
}
