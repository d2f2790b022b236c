//! Item-collection loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use gildedrose_core::DomainError;
use gildedrose_inventory::{Category, Item};

use crate::error::{FixtureError, FixtureResult};

/// One item as described in an inventory file.
///
/// `category` is optional; when absent the category is inferred from `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i64,
    pub quality: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl TryFrom<ItemRecord> for Item {
    type Error = DomainError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        if record.name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        let item = match record.category {
            Some(tag) => {
                let category: Category = tag.parse()?;
                Item::with_category(record.name, category, record.sell_in, record.quality)
            }
            None => Item::new(record.name, record.sell_in, record.quality),
        };
        Ok(item)
    }
}

/// The stock the shop starts with when no inventory file is given.
pub fn default_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured", 3, 6),
    ]
}

/// Parse a JSON array of [`ItemRecord`]s. `origin` names the source in errors.
pub fn parse_inventory(json: &str, origin: &str) -> FixtureResult<Vec<Item>> {
    let records: Vec<ItemRecord> =
        serde_json::from_str(json).map_err(|source| FixtureError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    records
        .into_iter()
        .map(|record| Item::try_from(record).map_err(FixtureError::from))
        .collect()
}

/// Read and parse an inventory file.
pub fn load_inventory(path: &Path) -> FixtureResult<Vec<Item>> {
    let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_inventory(&json, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), items = items.len(), "inventory loaded");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inventory_covers_every_category() {
        let items = default_inventory();
        for category in Category::ALL {
            assert!(
                items.iter().any(|i| i.category() == category),
                "missing {category}"
            );
        }
    }

    #[test]
    fn record_without_category_classifies_by_name() {
        let record = ItemRecord {
            name: "Aged Brie".to_string(),
            sell_in: 2,
            quality: 0,
            category: None,
        };
        let item = Item::try_from(record).unwrap();
        assert_eq!(item.category(), Category::Ripening);
    }

    #[test]
    fn record_with_category_uses_it() {
        let record = ItemRecord {
            name: "Conjured Mana Cake".to_string(),
            sell_in: 3,
            quality: 6,
            category: Some("enhanced_decay".to_string()),
        };
        let item = Item::try_from(record).unwrap();
        assert_eq!(item.category(), Category::EnhancedDecay);
    }

    #[test]
    fn blank_name_is_rejected() {
        let record = ItemRecord {
            name: "  ".to_string(),
            sell_in: 1,
            quality: 1,
            category: None,
        };
        assert!(matches!(
            Item::try_from(record),
            Err(DomainError::Validation(_))
        ));
    }
}
