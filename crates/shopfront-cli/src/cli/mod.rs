//! CLI for dry-running shopfront client logic.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shopfront_core::cart::CartOp;
use shopfront_core::config::{self, RuntimeMode};
use std::path::PathBuf;

use commands::{run_aliases, run_cart, run_redirect};

/// Top-level CLI for the shopfront developer tool.
#[derive(Debug, Parser)]
#[command(name = "shopfront")]
#[command(about = "shopfront: legacy route migration and cart ledger dry runs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show how a legacy `#...` location is migrated on page load.
    Redirect {
        /// Full URL (https://host/#store/1) or bare fragment (#store/1).
        location: String,
        /// Runtime mode: development or production (default from config/build).
        #[arg(long, value_name = "MODE")]
        mode: Option<RuntimeMode>,
    },

    /// Replay cart operations on an empty cart and print the result.
    Cart {
        /// Catalog JSON with {id, price} records; defaults to catalog_path from config.
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
        /// Operations in order: add:<id>, +<id>, remove:<id>, rm:<id>.
        #[arg(value_name = "OP")]
        ops: Vec<CartOp>,
    },

    /// List the legacy alias table in match order.
    Aliases,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Redirect { location, mode } => {
                let mode = mode.unwrap_or_else(|| cfg.runtime_mode());
                run_redirect(&cfg.alias_table(), mode, &location)?;
            }
            CliCommand::Cart { catalog, ops } => {
                let catalog = catalog.or_else(|| cfg.catalog_path.clone());
                run_cart(catalog.as_deref(), &ops)?;
            }
            CliCommand::Aliases => run_aliases(&cfg.alias_table()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
