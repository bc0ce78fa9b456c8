//! # Configuration Classifier
//!
//! Decides which configuration mode applies to a catalog item.
//!
//! ## Rule Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Classifier Rules (top-down, first match wins)          │
//! │                                                                         │
//! │  1. ArmorMath   note contains "base armor cost" or                      │
//! │                 "base metal armor cost" (case-sensitive)                │
//! │                 sub-flag: mithral when the name contains "Mithral"      │
//! │                                                                         │
//! │  2. Selector    note contains "Choose" (case-sensitive), OR the         │
//! │                 exact name is a variant-catalog key                     │
//! │                                                                         │
//! │  3. Plain       fallback - no choice needed, commit-eligible as-is      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order is load-bearing: an item whose note matches both an armor
//! phrase and "Choose" is ArmorMath. The rules are an explicit list, not
//! branch order, so that precedence stays visible.

use serde::{Deserialize, Serialize};

use crate::types::ItemRecord;
use crate::variants::has_variants;

// =============================================================================
// Configuration Mode
// =============================================================================

/// The three mutually exclusive configuration modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum ConfigMode {
    /// A base-armor choice is required; its cost is added as a surcharge.
    /// `mithral` narrows the eligible armor list, never the mode.
    ArmorMath { mithral: bool },

    /// A choice from an enumerated or dynamically sourced list is required.
    Selector,

    /// No choice needed; immediately eligible for commit, no surcharge.
    Plain,
}

impl ConfigMode {
    /// Whether the item can be committed without any selection.
    #[inline]
    pub fn is_plain(&self) -> bool {
        matches!(self, ConfigMode::Plain)
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Note phrases that trigger ArmorMath. Case-sensitive exact substrings;
/// "base metal armor cost" is not a superstring of the first, so both are
/// checked.
const ARMOR_MATH_PHRASES: &[&str] = &["base armor cost", "base metal armor cost"];

/// Note phrase that triggers Selector. Case-sensitive.
const SELECTOR_PHRASE: &str = "Choose";

/// Name marker that sets the mithral sub-flag on ArmorMath items.
const MITHRAL_MARKER: &str = "Mithral";

fn armor_math_rule(item: &ItemRecord) -> Option<ConfigMode> {
    let note = item.note_text();
    if ARMOR_MATH_PHRASES.iter().any(|p| note.contains(p)) {
        Some(ConfigMode::ArmorMath {
            mithral: item.name.contains(MITHRAL_MARKER),
        })
    } else {
        None
    }
}

fn selector_rule(item: &ItemRecord) -> Option<ConfigMode> {
    if item.note_text().contains(SELECTOR_PHRASE) || has_variants(&item.name) {
        Some(ConfigMode::Selector)
    } else {
        None
    }
}

/// The ordered rule list. Evaluated top-down; first match wins.
const RULES: &[fn(&ItemRecord) -> Option<ConfigMode>] = &[armor_math_rule, selector_rule];

// =============================================================================
// Classifier
// =============================================================================

/// Classifies a catalog item into its configuration mode.
///
/// Pure function of the record and the static tables; no side effects.
///
/// ## Example
/// ```rust
/// use outpost_core::classify::{classify, ConfigMode};
/// use outpost_core::cost::Cost;
/// use outpost_core::types::{ItemRecord, Rarity};
///
/// let item = ItemRecord {
///     name: "Potion of resistance".to_string(),
///     kind: "Potion".to_string(),
///     category: "Potions".to_string(),
///     rarity: Rarity::Uncommon,
///     base_cost: Cost::Numeric(50.0),
///     note: Some("Choose damage type".to_string()),
/// };
/// assert_eq!(classify(&item), ConfigMode::Selector);
/// ```
pub fn classify(item: &ItemRecord) -> ConfigMode {
    RULES
        .iter()
        .find_map(|rule| rule(item))
        .unwrap_or(ConfigMode::Plain)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Cost;
    use crate::types::Rarity;

    fn test_item(name: &str, note: Option<&str>) -> ItemRecord {
        ItemRecord {
            name: name.to_string(),
            kind: "Armor".to_string(),
            category: "Armor".to_string(),
            rarity: Rarity::Uncommon,
            base_cost: Cost::Numeric(100.0),
            note: note.map(|n| n.to_string()),
        }
    }

    #[test]
    fn test_plain_without_markers() {
        assert_eq!(classify(&test_item("Bag of holding", None)), ConfigMode::Plain);
        assert_eq!(
            classify(&test_item("Boots of elvenkind", Some("Silent steps"))),
            ConfigMode::Plain
        );
    }

    #[test]
    fn test_selector_from_note() {
        assert_eq!(
            classify(&test_item("Potion of resistance", Some("Choose damage type"))),
            ConfigMode::Selector
        );
    }

    #[test]
    fn test_selector_is_case_sensitive() {
        // "choose" lower-case does not trigger the rule.
        assert_eq!(
            classify(&test_item("Potion of weirdness", Some("you may choose one"))),
            ConfigMode::Plain
        );
    }

    #[test]
    fn test_selector_from_variant_catalog_key() {
        // No note at all - the exact name alone forces Selector.
        assert_eq!(classify(&test_item("Elemental gem", None)), ConfigMode::Selector);
    }

    #[test]
    fn test_armor_math_phrases() {
        assert_eq!(
            classify(&test_item("Mariner's Armor", Some("Costs 1,500 + base armor cost"))),
            ConfigMode::ArmorMath { mithral: false }
        );
        assert_eq!(
            classify(&test_item("Mithral Armor", Some("base metal armor cost"))),
            ConfigMode::ArmorMath { mithral: true }
        );
    }

    #[test]
    fn test_armor_math_wins_over_selector() {
        // Both conditions present: ArmorMath is checked first and wins.
        assert_eq!(
            classify(&test_item("Mariner's Armor", Some("Choose; add base armor cost"))),
            ConfigMode::ArmorMath { mithral: false }
        );
    }

    #[test]
    fn test_mithral_flag_comes_from_name_not_note() {
        assert_eq!(
            classify(&test_item("Mithral Plate", Some("base metal armor cost"))),
            ConfigMode::ArmorMath { mithral: true }
        );
        // "Mithral" in the note alone does not set the flag.
        assert_eq!(
            classify(&test_item("Strange Armor", Some("Mithral-like; base armor cost"))),
            ConfigMode::ArmorMath { mithral: false }
        );
    }
}
