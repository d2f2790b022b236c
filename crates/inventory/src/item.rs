use serde::Serialize;

use crate::category::Category;

/// A tracked stock item.
///
/// `name` and `category` are fixed at construction so the category can never
/// drift away from the name that selected it. `sell_in` and `quality` are open
/// to the caller; the update engine mutates them in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    category: Category,
    pub sell_in: i64,
    pub quality: i64,
}

impl Item {
    /// Build an item whose category is inferred from its exact name.
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        let name = name.into();
        let category = Category::from_name(&name);
        Self::with_category(name, category, sell_in, quality)
    }

    /// Build an item with an explicit category, regardless of its name.
    pub fn with_category(
        name: impl Into<String>,
        category: Category,
        sell_in: i64,
        quality: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_classifies_by_name() {
        let item = Item::new("Aged Brie", 2, 0);
        assert_eq!(item.category(), Category::Ripening);
        assert_eq!(item.name(), "Aged Brie");
    }

    #[test]
    fn explicit_category_overrides_name() {
        let item = Item::with_category("Conjured Mana Cake", Category::EnhancedDecay, 3, 6);
        assert_eq!(item.category(), Category::EnhancedDecay);
    }

    #[test]
    fn construction_does_not_normalize_quality() {
        let item = Item::new("Conjured", 20, 80);
        assert_eq!(item.quality, 80);
    }

    #[test]
    fn display_is_name_sell_in_quality() {
        let item = Item::new("Sulfuras, Hand of Ragnaros", -1, 80);
        assert_eq!(item.to_string(), "Sulfuras, Hand of Ragnaros, -1, 80");
    }
}
