//! # Browse State
//!
//! The loaded inventory plus the three live browse inputs (search text,
//! category tab, sort direction). The records themselves are immutable
//! after load; only the query mutates.

use std::sync::Mutex;

use outpost_core::query::{categories, visible_items};
use outpost_core::{CatalogQuery, ItemRecord, SortDir};

/// Browse state: immutable records, mutable query.
pub struct BrowseState {
    items: Vec<ItemRecord>,
    query: Mutex<CatalogQuery>,
}

impl BrowseState {
    pub fn new(items: Vec<ItemRecord>) -> Self {
        BrowseState {
            items,
            query: Mutex::new(CatalogQuery::default()),
        }
    }

    /// Full unfiltered record set, in catalog order.
    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    /// Current query snapshot.
    pub fn query(&self) -> CatalogQuery {
        self.query.lock().expect("query mutex poisoned").clone()
    }

    pub fn set_search(&self, text: &str) {
        self.query.lock().expect("query mutex poisoned").search = text.to_string();
    }

    pub fn set_category(&self, category: &str) {
        self.query.lock().expect("query mutex poisoned").category = category.to_string();
    }

    pub fn set_sort(&self, sort: SortDir) {
        self.query.lock().expect("query mutex poisoned").sort = sort;
    }

    /// The visible ordered subset under the current query.
    pub fn visible(&self) -> Vec<&ItemRecord> {
        visible_items(&self.items, &self.query())
    }

    /// Category tabs over the unfiltered set, "All" first.
    pub fn categories(&self) -> Vec<String> {
        categories(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outpost_core::{Cost, Rarity};

    fn test_item(name: &str, category: &str, cost: f64) -> ItemRecord {
        ItemRecord {
            name: name.to_string(),
            kind: "Wondrous item".to_string(),
            category: category.to_string(),
            rarity: Rarity::Uncommon,
            base_cost: Cost::Numeric(cost),
            note: None,
        }
    }

    #[test]
    fn test_query_updates_are_visible() {
        let browse = BrowseState::new(vec![
            test_item("Bag of holding", "Wondrous", 500.0),
            test_item("Potion of healing", "Potions", 50.0),
        ]);

        assert_eq!(browse.visible().len(), 2);

        browse.set_category("Potions");
        let visible = browse.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Potion of healing");

        browse.set_category("All");
        browse.set_search("bag");
        assert_eq!(browse.visible().len(), 1);
    }

    #[test]
    fn test_sort_toggle() {
        let browse = BrowseState::new(vec![
            test_item("Cheap", "Misc", 10.0),
            test_item("Dear", "Misc", 1000.0),
        ]);

        assert_eq!(browse.visible()[0].name, "Cheap");
        browse.set_sort(SortDir::Desc);
        assert_eq!(browse.visible()[0].name, "Dear");
    }
}
