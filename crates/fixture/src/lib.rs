//! `gildedrose-fixture` — the caller around the inventory engine.
//!
//! Resolves settings, loads the starting stock, runs the nightly updates and
//! writes each day out for display.

use std::io::Write;

pub mod config;
pub mod error;
pub mod inventory;
pub mod report;

pub use config::{FixtureConfig, OutputFormat};
pub use error::{FixtureError, FixtureResult};
pub use inventory::{ItemRecord, default_inventory, load_inventory, parse_inventory};
pub use report::{DaySnapshot, write_report};

/// Load, simulate and write the report according to `config`.
pub fn execute<W: Write>(config: &FixtureConfig, out: &mut W) -> FixtureResult<()> {
    let items = match &config.inventory {
        Some(path) => load_inventory(path)?,
        None => default_inventory(),
    };
    tracing::info!(
        items = items.len(),
        days = config.days,
        format = ?config.format,
        "running inventory simulation"
    );

    write_report(items, config.days, config.format, out)
}
