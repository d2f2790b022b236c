//! Inventory domain module.
//!
//! This crate contains the nightly stock update rules, implemented purely as
//! deterministic domain logic (no IO, no storage). Callers own the item
//! collection and run one update per simulated day.

pub mod category;
pub mod engine;
pub mod item;
pub mod shop;

pub use category::Category;
pub use engine::{advance, update_quality};
pub use item::Item;
pub use shop::GildedRose;
