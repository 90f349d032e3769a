//! Integration test: page-load migration of legacy `#...` locations.
//!
//! Parses hrefs the way the browser reports them, runs the redirect with the
//! built-in aliases plus a configured extra, and checks the history calls.

use shopfront_core::config::{RuntimeMode, ShopfrontConfig};
use shopfront_core::route::{
    AliasRule, HistoryEvent, HistoryLog, LegacyRedirect, LegacyUrl, Matcher, Rewrite,
};

fn run(href: &str) -> (Option<String>, Vec<HistoryEvent>) {
    let redirect = LegacyRedirect::new(
        ShopfrontConfig::default().alias_table(),
        RuntimeMode::Production,
    );
    let location = LegacyUrl::parse(href).unwrap();
    let mut log = HistoryLog::new();
    let route = redirect.run(&location, &mut log).map(|r| r.to_string());
    (route, log.events().to_vec())
}

#[test]
fn stripe_return_url_keeps_query() {
    let (route, events) = run("https://shop.example/#dashboard?stripe=success");
    assert_eq!(route.as_deref(), Some("/dashboard?stripe=success"));
    assert_eq!(
        events,
        vec![
            HistoryEvent::ReplaceEntry { href: "/".into() },
            HistoryEvent::Navigate {
                href: "/dashboard?stripe=success".into(),
                replace: true,
            },
        ]
    );
}

#[test]
fn replace_entry_uses_current_location_not_translation() {
    let (_, events) = run("https://shop.example/app?ref=mail#shopper-dashboard/abc");
    assert_eq!(
        events[0],
        HistoryEvent::ReplaceEntry {
            href: "/app?ref=mail".into()
        }
    );
    assert_eq!(
        events[1],
        HistoryEvent::Navigate {
            href: "/store/abc".into(),
            replace: true,
        }
    );
}

#[test]
fn legacy_aliases_land_on_expected_paths() {
    for (href, expected) in [
        ("#store/abc123", "/store/abc123"),
        ("#shopper-dashboard/abc", "/store/abc"),
        ("#shopper-dashboard", "/"),
        ("#landing", "/"),
    ] {
        let (route, events) = run(href);
        assert_eq!(route.as_deref(), Some(expected), "href {href}");
        assert_eq!(events.len(), 2);
    }
}

#[test]
fn no_fragment_is_noop_and_idempotent() {
    for href in ["https://shop.example/store/1", "https://shop.example/#", "#", ""] {
        let (route, events) = run(href);
        assert!(route.is_none(), "href {href:?}");
        assert!(events.is_empty(), "href {href:?}");
    }
}

#[test]
fn configured_alias_is_honoured() {
    let cfg = ShopfrontConfig {
        aliases: vec![AliasRule::new(
            Matcher::SegmentPrefix("restaurant".into()),
            Rewrite::ReplacePrefix("store".into()),
        )],
        ..ShopfrontConfig::default()
    };
    let redirect = LegacyRedirect::new(cfg.alias_table(), RuntimeMode::Development);
    let mut log = HistoryLog::new();
    let route = redirect
        .run(&LegacyUrl::parse("#restaurant/9?x=1").unwrap(), &mut log)
        .unwrap();
    assert_eq!(route.pathname(), "/store/9");
    assert_eq!(route.search(), Some("?x=1"));
}
