//! `shopfront redirect <location>` – dry-run the page-load legacy migration.

use anyhow::Result;
use shopfront_core::config::RuntimeMode;
use shopfront_core::route::{AliasTable, HistoryEvent, HistoryLog, LegacyRedirect, LegacyUrl};

pub fn run_redirect(aliases: &AliasTable, mode: RuntimeMode, location: &str) -> Result<()> {
    for line in render_redirect(aliases, mode, location)? {
        println!("{line}");
    }
    Ok(())
}

fn render_redirect(
    aliases: &AliasTable,
    mode: RuntimeMode,
    location: &str,
) -> Result<Vec<String>> {
    let location = LegacyUrl::parse(location)?;
    let redirect = LegacyRedirect::new(aliases.clone(), mode);
    let mut history = HistoryLog::new();

    let Some(route) = redirect.run(&location, &mut history) else {
        return Ok(vec!["no legacy fragment; nothing to do".to_string()]);
    };
    tracing::info!(mode = %mode, route = %route, "legacy redirect dry run");

    Ok(history
        .events()
        .iter()
        .map(|event| match event {
            HistoryEvent::ReplaceEntry { href } => format!("replace-entry {href}"),
            HistoryEvent::Navigate { href, replace } => {
                let how = if *replace { "replace" } else { "push" };
                format!("navigate      {href} ({how})")
            }
        })
        .collect())
}
