//! # Sheet Loader
//!
//! CSV → `Vec<ItemRecord>`, with the leniency rules from the crate
//! header.
//!
//! ## Sheet Shape
//! ```text
//! Item, Type, Category, Rarity, Cost (GP), Notes
//! Bag of holding, Wondrous item, Wondrous, Uncommon, 500,
//! Ammunition, +1 (each), Weapon, Ammunition, Uncommon, 25,
//! Mithral Armor, Armor, Armor, Uncommon, Varies, base metal armor cost
//! ```
//! Whitespace around cells is trimmed; headers are matched by name, not
//! position.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use outpost_core::{Cost, ItemRecord, Rarity};

use crate::error::CatalogResult;

// =============================================================================
// Raw Row
// =============================================================================

/// One sheet row before validation, straight off the CSV reader.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Item")]
    item: String,

    #[serde(rename = "Type")]
    kind: String,

    #[serde(rename = "Category")]
    category: String,

    #[serde(rename = "Rarity")]
    rarity: String,

    #[serde(rename = "Cost (GP)")]
    cost: String,

    #[serde(rename = "Notes", default)]
    notes: Option<String>,
}

impl RawRow {
    /// Validates the row into a catalog record, or explains why it was
    /// dropped.
    fn into_record(self) -> Result<ItemRecord, String> {
        if self.item.is_empty() {
            return Err("blank item name".to_string());
        }

        let rarity: Rarity = self
            .rarity
            .parse()
            .map_err(|e: outpost_core::types::UnknownRarity| e.to_string())?;

        let note = self.notes.filter(|n| !n.is_empty());

        Ok(ItemRecord {
            name: self.item,
            kind: self.kind,
            category: self.category,
            rarity,
            base_cost: Cost::parse(&self.cost),
            note,
        })
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Loads the inventory sheet from a file path.
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<Vec<ItemRecord>> {
    let path = path.as_ref();
    debug!(?path, "loading inventory sheet");

    let file = File::open(path)?;
    let items = parse_catalog(file)?;

    info!(count = items.len(), ?path, "inventory loaded");
    Ok(items)
}

/// Parses an inventory sheet from any reader. Rows come back in file
/// order.
///
/// Blank rows are skipped silently; rows with a blank name or an unknown
/// rarity are skipped with a `warn!`. A missing header column fails the
/// whole parse - that means the file is broken, not a row.
pub fn parse_catalog(reader: impl Read) -> CatalogResult<Vec<ItemRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    for (row_number, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let raw = result?;

        // Entirely blank padding rows are not worth a warning.
        if raw.item.is_empty()
            && raw.kind.is_empty()
            && raw.category.is_empty()
            && raw.rarity.is_empty()
            && raw.cost.is_empty()
        {
            continue;
        }

        match raw.into_record() {
            Ok(record) => items.push(record),
            Err(reason) => {
                // Header is row 1; data starts at row 2.
                warn!(row = row_number + 2, %reason, "skipping inventory row");
            }
        }
    }

    Ok(items)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use outpost_core::Rarity;

    const SHEET: &str = "\
Item,Type,Category,Rarity,Cost (GP),Notes
Bag of holding,Wondrous item,Wondrous,Uncommon,500,
Potion of resistance,Potion,Potions,Uncommon,50,Choose damage type
Fireball wand,Wand,Wands,Rare,\"1,500\",
Deck of many things,Wondrous item,Wondrous,Legendary,Varies,
";

    #[test]
    fn test_parse_basic_sheet() {
        let items = parse_catalog(SHEET.as_bytes()).unwrap();
        assert_eq!(items.len(), 4);

        let bag = &items[0];
        assert_eq!(bag.name, "Bag of holding");
        assert_eq!(bag.kind, "Wondrous item");
        assert_eq!(bag.rarity, Rarity::Uncommon);
        assert_eq!(bag.base_cost, Cost::Numeric(500.0));
        assert_eq!(bag.note, None);
    }

    #[test]
    fn test_thousands_separators_ingest() {
        let items = parse_catalog(SHEET.as_bytes()).unwrap();
        assert_eq!(items[2].base_cost, Cost::Numeric(1500.0));
    }

    #[test]
    fn test_varies_cell_ingests_as_unknown() {
        let items = parse_catalog(SHEET.as_bytes()).unwrap();
        assert_eq!(items[3].base_cost, Cost::Unknown);
    }

    #[test]
    fn test_file_order_preserved() {
        let items = parse_catalog(SHEET.as_bytes()).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Bag of holding",
                "Potion of resistance",
                "Fireball wand",
                "Deck of many things",
            ]
        );
    }

    #[test]
    fn test_blank_and_bad_rows_are_skipped() {
        let sheet = "\
Item,Type,Category,Rarity,Cost (GP),Notes
,,,,,
Bag of holding,Wondrous item,Wondrous,Uncommon,500,
,Wondrous item,Wondrous,Uncommon,10,orphaned cells
Odd trinket,Wondrous item,Wondrous,Mythic,10,
";
        let items = parse_catalog(sheet.as_bytes()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Bag of holding");
    }

    #[test]
    fn test_header_whitespace_is_trimmed() {
        let sheet = "\
Item, Type, Category, Rarity, Cost (GP), Notes
Bag of holding, Wondrous item, Wondrous, Uncommon, 500,
";
        let items = parse_catalog(sheet.as_bytes()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, "Wondrous item");
    }

    #[test]
    fn test_missing_column_is_a_hard_error() {
        let sheet = "\
Item,Type,Category,Rarity
Bag of holding,Wondrous item,Wondrous,Uncommon
";
        assert!(parse_catalog(sheet.as_bytes()).is_err());
    }

    #[test]
    fn test_empty_note_becomes_none() {
        let items = parse_catalog(SHEET.as_bytes()).unwrap();
        assert_eq!(items[0].note, None);
        assert_eq!(items[1].note.as_deref(), Some("Choose damage type"));
    }
}
