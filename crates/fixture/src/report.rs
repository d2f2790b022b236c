//! Presentation of simulated days.
//!
//! Days are written as they are produced; only the current stock is held in
//! memory, whatever the day count.

use std::io::Write;

use serde::Serialize;

use gildedrose_inventory::{GildedRose, Item};

use crate::config::OutputFormat;
use crate::error::{FixtureError, FixtureResult};

/// Inventory state at the end of a simulated day. Day 0 is the initial stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySnapshot<'a> {
    pub day: u32,
    pub items: &'a [Item],
}

/// Run the shop for `days` days, writing the initial state and every day after to `out`.
pub fn write_report<W: Write>(
    items: Vec<Item>,
    days: u32,
    format: OutputFormat,
    out: &mut W,
) -> FixtureResult<()> {
    let mut shop = GildedRose::new(items);
    let mut writer = DayWriter { format, out };

    writer.begin()?;
    writer.day(DaySnapshot {
        day: 0,
        items: shop.items(),
    })?;
    for day in 1..=days {
        shop.update_quality();
        writer.day(DaySnapshot {
            day,
            items: shop.items(),
        })?;
    }
    writer.finish()
}

struct DayWriter<'w, W> {
    format: OutputFormat,
    out: &'w mut W,
}

impl<W: Write> DayWriter<'_, W> {
    fn begin(&mut self) -> FixtureResult<()> {
        match self.format {
            OutputFormat::Text => Ok(()),
            OutputFormat::Json => self.out.write_all(b"[\n").map_err(FixtureError::Output),
        }
    }

    /// Text: header, column line, one `name, sell_in, quality` line per item, blank line.
    fn day(&mut self, snapshot: DaySnapshot<'_>) -> FixtureResult<()> {
        match self.format {
            OutputFormat::Text => {
                let mut block = format!(
                    "-------- day {} --------\nname, sellIn, quality\n",
                    snapshot.day
                );
                for item in snapshot.items {
                    block.push_str(&item.to_string());
                    block.push('\n');
                }
                block.push('\n');
                self.out
                    .write_all(block.as_bytes())
                    .map_err(FixtureError::Output)
            }
            OutputFormat::Json => {
                if snapshot.day > 0 {
                    self.out.write_all(b",\n").map_err(FixtureError::Output)?;
                }
                serde_json::to_writer_pretty(&mut *self.out, &snapshot).map_err(|e| {
                    if e.is_io() {
                        FixtureError::Output(e.into())
                    } else {
                        FixtureError::Render(e)
                    }
                })
            }
        }
    }

    fn finish(&mut self) -> FixtureResult<()> {
        if self.format == OutputFormat::Json {
            self.out.write_all(b"\n]\n").map_err(FixtureError::Output)?;
        }
        self.out.flush().map_err(FixtureError::Output)
    }
}
