//! # Domain Types
//!
//! Core domain types used throughout the Outpost terminal.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ItemRecord    │   │    CartLine     │   │     Rarity      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  id (UUID)      │   │  Common         │       │
//! │  │  kind, category │   │  item snapshot  │   │  Uncommon       │       │
//! │  │  rarity         │   │  final_price    │   │  Rare           │       │
//! │  │  base_cost      │   │  variant        │   │  VeryRare       │       │
//! │  │  note           │   │  display_name   │   │  Legendary      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ItemRecord ──(configure + commit)──► CartLine                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ItemRecord` is immutable once loaded; `CartLine` is built only by the
//! commit gate and immutable afterward.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cost::Cost;

// =============================================================================
// Rarity
// =============================================================================

/// Item rarity tier, as printed on the inventory sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    VeryRare,
    Legendary,
}

impl FromStr for Rarity {
    type Err = UnknownRarity;

    /// Parses the sheet spelling, case-insensitively ("Very Rare" is two
    /// words on the sheet).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "uncommon" => Ok(Rarity::Uncommon),
            "rare" => Ok(Rarity::Rare),
            "very rare" => Ok(Rarity::VeryRare),
            "legendary" => Ok(Rarity::Legendary),
            _ => Err(UnknownRarity(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::VeryRare => "Very Rare",
            Rarity::Legendary => "Legendary",
        };
        write!(f, "{label}")
    }
}

/// A rarity cell the sheet's vocabulary does not cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRarity(pub String);

impl fmt::Display for UnknownRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rarity: {}", self.0)
    }
}

impl std::error::Error for UnknownRarity {}

// =============================================================================
// Item Record
// =============================================================================

/// One row of the loaded inventory. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Display name shown on the card and the stash line.
    pub name: String,

    /// The sheet's "Type" column (e.g. "Wondrous item", "Armor").
    pub kind: String,

    /// Category used by the filter tabs.
    pub category: String,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Raw cost cell, already through the [`Cost::parse`] boundary.
    pub base_cost: Cost,

    /// Free-form note; drives configuration mode detection.
    pub note: Option<String>,
}

impl ItemRecord {
    /// The note text, or "" when the sheet cell was blank.
    ///
    /// Classification and option resolution match against this.
    #[inline]
    pub fn note_text(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }

    /// Selector label: the item name truncated at the first comma, so
    /// "Ammunition, +1 (each)" prompts as "Ammunition".
    pub fn short_name(&self) -> &str {
        self.name.split(',').next().unwrap_or(&self.name)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A committed stash line.
///
/// Built only by the commit gate ([`crate::config::ItemConfig::commit`]);
/// immutable afterward. The stash list is append-only.
///
/// Invariants held at build time:
/// - `final_price == item.base_cost.amount() + surcharge at commit`
/// - an item requiring configuration never yields `variant == None`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Unique line id (UUID v4).
    pub id: String,

    /// Frozen copy of the catalog row at commit time.
    pub item: ItemRecord,

    /// Base cost plus any armor surcharge, in gp.
    pub final_price: f64,

    /// The chosen variant, base armor, or inscribed text, if any.
    pub variant: Option<String>,

    /// "{name} ({variant})" when a variant was chosen, else the plain name.
    pub display_name: String,

    /// When this line was committed.
    pub added_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
