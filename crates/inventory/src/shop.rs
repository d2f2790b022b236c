use crate::engine;
use crate::item::Item;

/// A shop's stock, updated once per simulated day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Run one simulated day over every item, in order.
    pub fn update_quality(&mut self) {
        engine::update_quality(&mut self.items);
        tracing::debug!(items = self.items.len(), "inventory advanced one day");
    }

    /// Run `days` consecutive updates.
    pub fn simulate(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }
}

impl From<Vec<Item>> for GildedRose {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
