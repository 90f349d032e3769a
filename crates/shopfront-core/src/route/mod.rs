//! Legacy route migration.
//!
//! Older builds of the web client routed on the URL fragment
//! (`/#store/abc123`). This module turns such a location into the
//! path-based route (`/store/abc123`) and drives the one-time history
//! rewrite on page load.

mod alias;
mod location;
mod redirect;
mod translate;

pub use alias::{AliasRule, AliasTable, Matcher, Rewrite};
pub use location::{CanonicalRoute, LegacyUrl};
pub use redirect::{HistoryEvent, HistoryLog, LegacyRedirect, NavigateOptions, Navigator};
pub use translate::translate_fragment;
