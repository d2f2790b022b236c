use core::str::FromStr;

use serde::Serialize;

use gildedrose_core::DomainError;

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED: &str = "Conjured";

/// Update behavior of an item, assigned once when the item is built.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Gains quality with age, twice as fast once expired.
    Ripening,
    /// Never sold and never changes.
    Legendary,
    /// Gains quality as the event nears, worthless after it.
    EventTicket,
    /// Loses quality twice as fast as a generic item.
    EnhancedDecay,
    /// Everything else.
    Generic,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Ripening,
        Category::Legendary,
        Category::EventTicket,
        Category::EnhancedDecay,
        Category::Generic,
    ];

    /// Classify an item by exact name. Unrecognized names fall back to `Generic`.
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::Ripening,
            SULFURAS => Category::Legendary,
            BACKSTAGE_PASS => Category::EventTicket,
            CONJURED => Category::EnhancedDecay,
            _ => Category::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ripening => "ripening",
            Category::Legendary => "legendary",
            Category::EventTicket => "event_ticket",
            Category::EnhancedDecay => "enhanced_decay",
            Category::Generic => "generic",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::unknown_category(s))
    }
}
