//! # Catalog Query Engine
//!
//! Search, category filter, and cost sort over the full item set.
//!
//! ## Query Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Visible Subset Derivation                            │
//! │                                                                         │
//! │  full catalog ──► text filter ──► category filter ──► cost sort         │
//! │                   (name OR note,   ("All" = off)       (stable,         │
//! │                    case-insensitive)                    "Varies" at the │
//! │                                                         pricey end)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sort is stable: equal-cost rows keep catalog (file) order across
//! re-renders for identical input.

use serde::{Deserialize, Serialize};

use crate::types::ItemRecord;
use crate::ALL_CATEGORY;

// =============================================================================
// Sort Direction
// =============================================================================

/// Two-way cost sort toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    /// Parses the toggle labels used at the prompt.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "low" => Some(SortDir::Asc),
            "desc" | "high" => Some(SortDir::Desc),
            _ => None,
        }
    }
}

// =============================================================================
// Catalog Query
// =============================================================================

/// The three live browse inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    /// Free-text search; matches item name or note, case-insensitively.
    pub search: String,

    /// Selected category tab; [`ALL_CATEGORY`] disables the filter.
    pub category: String,

    /// Cost sort direction.
    pub sort: SortDir,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        CatalogQuery {
            search: String::new(),
            category: ALL_CATEGORY.to_string(),
            sort: SortDir::Asc,
        }
    }
}

impl CatalogQuery {
    fn matches(&self, item: &ItemRecord) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = search.is_empty()
            || item.name.to_lowercase().contains(&search)
            || item
                .note
                .as_ref()
                .is_some_and(|n| n.to_lowercase().contains(&search));

        let matches_category =
            self.category == ALL_CATEGORY || item.category == self.category;

        matches_search && matches_category
    }
}

// =============================================================================
// Query Evaluation
// =============================================================================

/// Produces the visible ordered subset for the current query.
///
/// Filter first, then a stable sort by effective cost: "Varies" rows land
/// at the expensive extreme in either direction, ties keep catalog order.
pub fn visible_items<'a>(items: &'a [ItemRecord], query: &CatalogQuery) -> Vec<&'a ItemRecord> {
    let mut visible: Vec<&ItemRecord> = items.iter().filter(|i| query.matches(i)).collect();

    visible.sort_by(|a, b| {
        let ka = a.base_cost.sort_key(query.sort);
        let kb = b.base_cost.sort_key(query.sort);
        match query.sort {
            SortDir::Asc => ka.total_cmp(&kb),
            SortDir::Desc => kb.total_cmp(&ka),
        }
    });

    visible
}

/// Derives the category tab list: "All" first, then every distinct
/// non-empty category in first-seen order over the unfiltered set.
pub fn categories(items: &[ItemRecord]) -> Vec<String> {
    let mut tabs = vec![ALL_CATEGORY.to_string()];
    for item in items {
        if !item.category.is_empty() && !tabs.contains(&item.category) {
            tabs.push(item.category.clone());
        }
    }
    tabs
}

// =============================================================================
// Unit Tests
// =============================================================================
