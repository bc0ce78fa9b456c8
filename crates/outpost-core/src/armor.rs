//! # Base Armor Table
//!
//! The fixed table of base armors and the eligibility rules that decide
//! which of them an armor-math item may be built on.
//!
//! ## Eligibility Rules (ordered)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Shields are never valid base armor for these enchantments.          │
//! │  2. Mithral items additionally require Medium or Heavy class,           │
//! │     and never Hide (Medium but non-metal).                              │
//! │  3. Everything else (e.g. Mariner's): any non-shield armor qualifies.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Armor Class
// =============================================================================

/// Weight class of a base armor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorClass {
    Light,
    Medium,
    Heavy,
    Shield,
}

// =============================================================================
// Armor Entry
// =============================================================================

/// One row of the base-armor table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArmorEntry {
    pub name: &'static str,
    /// List price in gp; becomes the surcharge when chosen as a base.
    pub cost: f64,
    pub class: ArmorClass,
    pub metal: bool,
}

/// The full base-armor table. Static, never mutated.
pub const BASE_ARMORS: &[ArmorEntry] = &[
    // Light armor
    ArmorEntry { name: "Padded", cost: 5.0, class: ArmorClass::Light, metal: false },
    ArmorEntry { name: "Leather", cost: 10.0, class: ArmorClass::Light, metal: false },
    ArmorEntry { name: "Studded Leather", cost: 45.0, class: ArmorClass::Light, metal: false },
    // Medium armor
    ArmorEntry { name: "Hide", cost: 10.0, class: ArmorClass::Medium, metal: false },
    ArmorEntry { name: "Chain Shirt", cost: 50.0, class: ArmorClass::Medium, metal: true },
    ArmorEntry { name: "Scale Mail", cost: 50.0, class: ArmorClass::Medium, metal: true },
    ArmorEntry { name: "Breastplate", cost: 400.0, class: ArmorClass::Medium, metal: true },
    ArmorEntry { name: "Half Plate", cost: 750.0, class: ArmorClass::Medium, metal: true },
    // Heavy armor
    ArmorEntry { name: "Ring Mail", cost: 30.0, class: ArmorClass::Heavy, metal: true },
    ArmorEntry { name: "Chain Mail", cost: 75.0, class: ArmorClass::Heavy, metal: true },
    ArmorEntry { name: "Splint", cost: 200.0, class: ArmorClass::Heavy, metal: true },
    ArmorEntry { name: "Plate", cost: 1500.0, class: ArmorClass::Heavy, metal: true },
    // Shield - excluded from every armor-math enchantment
    ArmorEntry { name: "Shield", cost: 10.0, class: ArmorClass::Shield, metal: true },
];

// =============================================================================
// Eligibility
// =============================================================================

/// The base armors an armor-math item may be built on.
///
/// Applies the ordered rules from the module header. `mithral` is the
/// classifier's sub-flag; it narrows, never widens.
pub fn eligible_armors(mithral: bool) -> Vec<&'static ArmorEntry> {
    BASE_ARMORS
        .iter()
        .filter(|a| {
            // Rule 1: shields are never valid base armor here.
            if a.class == ArmorClass::Shield {
                return false;
            }

            // Rule 2: Mithral wants Medium or Heavy, but never Hide.
            if mithral {
                return matches!(a.class, ArmorClass::Medium | ArmorClass::Heavy)
                    && a.name != "Hide";
            }

            // Rule 3: any remaining armor qualifies.
            true
        })
        .collect()
}

/// Looks a base armor up among the *eligible* set.
///
/// Deliberately scoped to the filtered list: an ineligible name (Shield,
/// or Hide under Mithral) resolves to `None` rather than a surcharge.
pub fn find_eligible(name: &str, mithral: bool) -> Option<&'static ArmorEntry> {
    eligible_armors(mithral).into_iter().find(|a| a.name == name)
}

// =============================================================================
// Unit Tests
// =============================================================================
