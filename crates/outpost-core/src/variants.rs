//! # Variant Catalog
//!
//! Fixed item-to-options table for selector items whose choices are
//! enumerated up front (ammunition shapes, gem attunements, damage types,
//! creature wards). Keyed by the exact item name as printed on the sheet.
//!
//! Spell selectors are not listed here; their options come from the remote
//! spell index at configuration time.

/// Exact item name → ordered option list. Static, never mutated.
pub const ITEM_VARIANTS: &[(&str, &[&str])] = &[
    (
        "Ammunition, +1 (each)",
        &["Arrow", "Bolt", "Sling Bullet", "Blowgun Needle"],
    ),
    (
        "Ammunition, +2 (each)",
        &["Arrow", "Bolt", "Sling Bullet", "Blowgun Needle"],
    ),
    (
        "Elemental gem",
        &[
            "Blue Sapphire (Air)",
            "Yellow Diamond (Earth)",
            "Red Corundum (Fire)",
            "Emerald (Water)",
        ],
    ),
    (
        "Potion of resistance",
        &[
            "Acid", "Cold", "Fire", "Force", "Lightning", "Necrotic", "Poison", "Psychic",
            "Radiant", "Thunder",
        ],
    ),
    (
        "Scroll of protection",
        &[
            "Aberrations",
            "Beasts",
            "Celestials",
            "Constructs",
            "Dragons",
            "Elementals",
            "Fey",
            "Fiends",
            "Giants",
            "Monstrosities",
            "Oozes",
            "Plants",
            "Undead",
        ],
    ),
];

/// The fixed option list for an exact item name, if one exists.
pub fn variants_for(name: &str) -> Option<&'static [&'static str]> {
    ITEM_VARIANTS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, opts)| *opts)
}

/// Whether the exact item name is a variant-catalog key.
///
/// This alone is enough to force Selector mode, even with no "Choose"
/// note on the row.
#[inline]
pub fn has_variants(name: &str) -> bool {
    variants_for(name).is_some()
}
