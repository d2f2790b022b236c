use std::io::BufWriter;

use anyhow::Context;

use gildedrose_fixture::{FixtureConfig, execute};

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let config = FixtureConfig::from_process().context("failed to resolve configuration")?;
    tracing::info!(?config, "configuration resolved");

    let mut stdout = BufWriter::new(std::io::stdout().lock());
    execute(&config, &mut stdout).context("inventory simulation failed")?;
    Ok(())
}
