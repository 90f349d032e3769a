//! `shopfront aliases` – list legacy aliases in match order.

use shopfront_core::route::{AliasTable, Matcher, Rewrite};

pub fn run_aliases(aliases: &AliasTable) {
    for line in render_aliases(aliases) {
        println!("{line}");
    }
}

fn render_aliases(aliases: &AliasTable) -> Vec<String> {
    aliases
        .rules()
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            let from = match &rule.matcher {
                Matcher::SegmentPrefix(p) => format!("#{p}/*"),
                Matcher::Exact(p) => format!("#{p}"),
            };
            let to = match (&rule.matcher, &rule.rewrite) {
                (Matcher::SegmentPrefix(_), Rewrite::ReplacePrefix(p)) => {
                    format!("/{}/*", p.trim_start_matches('/'))
                }
                (Matcher::Exact(_), Rewrite::ReplacePrefix(p)) => {
                    format!("/{}", p.trim_start_matches('/'))
                }
                (_, Rewrite::To(p)) => p.clone(),
            };
            format!("{:>2}. {:<28} -> {}", i + 1, from, to)
        })
        .collect()
}
