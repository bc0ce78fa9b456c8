//! # Catalog Commands
//!
//! Browse-side commands: search text, category tabs, cost sort, and the
//! visible list itself.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types `search fire`                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_search() updates the live query                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_items() re-derives the visible subset (filter + stable sort)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ItemView> rendered as the numbered grid                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use outpost_core::{display_gp, ItemRecord, SortDir};

use crate::state::BrowseState;

/// Item view for the numbered browse grid.
///
/// `position` is 1-based and only meaningful within the current view; it
/// is what `open <n>` consumes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub position: usize,
    pub name: String,
    pub kind: String,
    pub category: String,
    pub rarity: String,
    pub display_cost: String,
    pub note: Option<String>,
}

impl ItemView {
    fn new(position: usize, item: &ItemRecord) -> Self {
        ItemView {
            position,
            name: item.name.clone(),
            kind: item.kind.clone(),
            category: item.category.clone(),
            rarity: item.rarity.to_string(),
            display_cost: display_gp(item.base_cost.amount()),
            note: item.note.clone(),
        }
    }
}

/// Updates the live search text.
pub fn set_search(browse: &BrowseState, text: &str) {
    debug!(search = %text, "set_search command");
    browse.set_search(text);
}

/// Selects a category tab. Unknown tabs simply filter to nothing.
pub fn set_category(browse: &BrowseState, category: &str) {
    debug!(%category, "set_category command");
    browse.set_category(category);
}

/// Flips the cost sort direction.
pub fn set_sort(browse: &BrowseState, sort: SortDir) {
    debug!(?sort, "set_sort command");
    browse.set_sort(sort);
}

/// The visible ordered subset under the current query.
pub fn list_items(browse: &BrowseState) -> Vec<ItemView> {
    let views: Vec<ItemView> = browse
        .visible()
        .iter()
        .enumerate()
        .map(|(i, item)| ItemView::new(i + 1, item))
        .collect();
    debug!(count = views.len(), "list_items command");
    views
}

/// Category tabs: "All" first, then first-seen order.
pub fn list_categories(browse: &BrowseState) -> Vec<String> {
    browse.categories()
}
