//! # outpost-core: Pure Decision Logic for the Outpost Shop
//!
//! This crate is the **heart** of the Outpost terminal. It decides, per
//! catalog item, whether a choice is required, what the valid choices are,
//! how a choice affects price, and when the item may be committed to the
//! stash - all as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Outpost Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal Surface (apps/terminal)               │   │
//! │  │    search ──► open card ──► pick/inscribe ──► add to stash      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ outpost-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │   cost   │ │ classify │ │  options │ │  config + query  │  │   │
//! │  │   │  parse   │ │  rules   │ │  filter  │ │  gate + sort     │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌──────────────▼─────────┐  ┌─▼──────────────────────┐                │
//! │  │   outpost-catalog      │  │   outpost-grimoire     │                │
//! │  │   (CSV ingestion)      │  │   (spell lookup)       │                │
//! │  └────────────────────────┘  └────────────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ItemRecord, Rarity, CartLine)
//! - [`cost`] - Tagged cost value, the sole conversion boundary for raw cells
//! - [`armor`] - The fixed base-armor table and its eligibility rules
//! - [`variants`] - The fixed item-to-options variant catalog
//! - [`classify`] - Configuration mode classifier (ordered rules)
//! - [`options`] - Option resolution and typed-filter matching
//! - [`config`] - Per-card configuration state, pricing, and the commit gate
//! - [`query`] - Catalog search/filter/sort engine
//! - [`error`] - Domain error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod armor;
pub mod classify;
pub mod config;
pub mod cost;
pub mod error;
pub mod options;
pub mod query;
pub mod types;
pub mod variants;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use outpost_core::Cost` instead of
// `use outpost_core::cost::Cost`

pub use armor::{ArmorClass, ArmorEntry, BASE_ARMORS};
pub use classify::{classify, ConfigMode};
pub use config::ItemConfig;
pub use cost::{display_gp, format_gp, Cost};
pub use error::{ConfigError, ConfigResult};
pub use options::OptionSource;
pub use query::{CatalogQuery, SortDir};
pub use types::{CartLine, ItemRecord, Rarity};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Label rendered whenever a final price comes out to zero.
///
/// A genuinely free item and a variable-cost item are indistinguishable at
/// display time; both show this label.
pub const VARIES_LABEL: &str = "Varies";

/// Effective cost of an unknown-cost item when sorting ascending.
/// Pushes "Varies" rows past every priced row.
pub const VARIES_SORT_CEILING: f64 = 999_999.0;

/// Effective cost of an unknown-cost item when sorting descending.
/// Keeps "Varies" rows past every priced row from the other direction too.
pub const VARIES_SORT_FLOOR: f64 = -1.0;

/// The pseudo-category that disables category filtering.
pub const ALL_CATEGORY: &str = "All";
