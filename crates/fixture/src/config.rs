//! Simulation settings.
//!
//! Resolved from defaults, then environment variables, then command-line
//! arguments; later sources win.

use core::str::FromStr;
use std::path::PathBuf;

use crate::error::{FixtureError, FixtureResult};

pub const DAYS_ENV: &str = "GILDEDROSE_DAYS";
pub const INVENTORY_ENV: &str = "GILDEDROSE_INVENTORY";
pub const FORMAT_ENV: &str = "GILDEDROSE_FORMAT";

pub const DEFAULT_DAYS: u32 = 2;

pub const USAGE: &str = "usage: gildedrose [days] [--inventory PATH] [--format text|json]";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(FixtureError::config(format!(
                "unknown output format '{other}' (expected text or json)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Number of days to simulate after the initial state.
    pub days: u32,
    /// JSON inventory file; `None` uses the built-in stock.
    pub inventory: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            inventory: None,
            format: OutputFormat::Text,
        }
    }
}

impl FixtureConfig {
    /// Resolve from the running process (`std::env::args` and `std::env::var`).
    pub fn from_process() -> FixtureResult<Self> {
        Self::resolve(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Resolve from explicit sources. `args` excludes the program name.
    pub fn resolve<I, S, F>(args: I, env: F) -> FixtureResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_env(env)?;
        config.apply_args(args)?;
        Ok(config)
    }

    fn apply_env<F>(&mut self, env: F) -> FixtureResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(days) = env(DAYS_ENV) {
            self.days = parse_days(&days)?;
        }
        if let Some(path) = env(INVENTORY_ENV).filter(|p| !p.trim().is_empty()) {
            self.inventory = Some(PathBuf::from(path));
        }
        if let Some(format) = env(FORMAT_ENV) {
            self.format = format.parse()?;
        }
        Ok(())
    }

    fn apply_args<I, S>(&mut self, args: I) -> FixtureResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut positional_seen = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--inventory" => {
                    let path = args.next().ok_or_else(|| missing_value("--inventory"))?;
                    self.inventory = Some(PathBuf::from(path));
                }
                "--format" => {
                    let format = args.next().ok_or_else(|| missing_value("--format"))?;
                    self.format = format.parse()?;
                }
                flag if flag.starts_with("--") => {
                    return Err(FixtureError::config(format!(
                        "unknown option '{flag}'\n{USAGE}"
                    )));
                }
                value if !positional_seen => {
                    self.days = parse_days(value)?;
                    positional_seen = true;
                }
                extra => {
                    return Err(FixtureError::config(format!(
                        "unexpected argument '{extra}'\n{USAGE}"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_days(raw: &str) -> FixtureResult<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        FixtureError::config(format!(
            "days must be a non-negative integer, got '{raw}'"
        ))
    })
}

fn missing_value(flag: &str) -> FixtureError {
    FixtureError::config(format!("{flag} requires a value\n{USAGE}"))
}
