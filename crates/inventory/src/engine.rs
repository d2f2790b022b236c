//! One-day state transition for stock items.
//!
//! Each item moves through four phases in a fixed order:
//!
//! 1. appreciation (ripening items and event tickets), based on the
//!    `sell_in` value *before* the day passes;
//! 2. the `sell_in` countdown;
//! 3. decay (generic and enhanced-decay items), only while quality is positive;
//! 4. expiry adjustments, using the *decremented* `sell_in`.
//!
//! Phase 4 is checked after the countdown, so an item crossing expiry today
//! is already treated as expired. Ripening items therefore gain twice on that
//! day, and event tickets are zeroed the day after the event.

use gildedrose_core::quality::{lower, raise};

use crate::category::Category;
use crate::item::Item;

/// Advance a single item by one day, in place.
///
/// Legendary items are left untouched, including out-of-range quality.
pub fn advance(item: &mut Item) {
    let category = item.category();
    if category == Category::Legendary {
        return;
    }

    if let Some(gain) = appreciation(category, item.sell_in) {
        item.quality = raise(item.quality, gain);
    }

    item.sell_in = item.sell_in.saturating_sub(1);
    let expired = item.sell_in < 0;

    if item.quality > 0 {
        if let Some(rate) = decay_rate(category) {
            item.quality = lower(item.quality, rate);
            if expired {
                item.quality = lower(item.quality, rate);
            }
        }
    }

    if expired {
        match category {
            Category::EventTicket => item.quality = 0,
            Category::Ripening => item.quality = raise(item.quality, 1),
            Category::Generic | Category::EnhancedDecay | Category::Legendary => {}
        }
    }
}

/// Apply one day to every item, in collection order.
pub fn update_quality(items: &mut [Item]) {
    items.iter_mut().for_each(advance);
}

fn appreciation(category: Category, sell_in: i64) -> Option<i64> {
    match category {
        Category::Ripening => Some(1),
        Category::EventTicket => Some(match sell_in {
            -10..=5 => 3,
            6..=10 => 2,
            _ => 1,
        }),
        Category::Legendary | Category::EnhancedDecay | Category::Generic => None,
    }
}

fn decay_rate(category: Category) -> Option<i64> {
    match category {
        Category::Generic => Some(1),
        Category::EnhancedDecay => Some(2),
        Category::Ripening | Category::EventTicket | Category::Legendary => None,
    }
}
