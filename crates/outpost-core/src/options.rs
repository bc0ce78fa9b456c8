//! # Option Resolver
//!
//! Produces the concrete list of selectable options for a configuration
//! mode, and owns the typed-filter matching rules behind the free-text
//! fallback.
//!
//! ## Sources By Mode
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ArmorMath           → the eligible slice of the base-armor table       │
//! │  Selector (spell)    → the remote spell index, keyed by the note        │
//! │  Selector (fixed)    → the variant catalog entry for the exact name,    │
//! │                        or an empty list if absent                       │
//! │  Plain               → no options at all                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The spell source itself lives in outpost-grimoire; this module only
//! decides that a card needs it. The free-text fallback is offered whenever
//! the typed filter leaves zero sourced options and no lookup is in flight -
//! it is the only path to a value when the remote index is unavailable,
//! empty, or incomplete.

use crate::armor::{eligible_armors, ArmorEntry};
use crate::classify::ConfigMode;
use crate::types::ItemRecord;
use crate::variants::variants_for;

// =============================================================================
// Option Source
// =============================================================================

/// Where a card's selectable options come from.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionSource {
    /// Eligible base armors; picking one adds its cost as a surcharge.
    Armor(Vec<&'static ArmorEntry>),

    /// Fixed options from the variant catalog. May be empty for unlisted
    /// Selector items - inscribe is then the only path to a value.
    Fixed(&'static [&'static str]),

    /// Names come from the remote spell index, keyed by the card's note.
    Spells,

    /// Plain cards present no choices.
    None,
}

/// Spell markers searched for in the lower-cased note text.
const SPELL_MARKERS: &[&str] = &["spell", "cantrip"];

/// Whether a selector note points at the remote spell index.
pub fn is_spell_note(note: &str) -> bool {
    let note = note.to_lowercase();
    SPELL_MARKERS.iter().any(|m| note.contains(m))
}

/// Resolves the option source for an item in a given mode.
///
/// Pure; the grimoire crate performs the actual spell fetch when this
/// returns [`OptionSource::Spells`].
pub fn resolve_options(item: &ItemRecord, mode: ConfigMode) -> OptionSource {
    match mode {
        ConfigMode::ArmorMath { mithral } => OptionSource::Armor(eligible_armors(mithral)),
        ConfigMode::Selector => {
            if is_spell_note(item.note_text()) {
                OptionSource::Spells
            } else {
                OptionSource::Fixed(variants_for(&item.name).unwrap_or(&[]))
            }
        }
        ConfigMode::Plain => OptionSource::None,
    }
}

// =============================================================================
// Typed-Filter Matching
// =============================================================================

/// Case-insensitive substring match used when the user types inside an
/// open option list.
#[inline]
pub fn matches_filter(option: &str, typed: &str) -> bool {
    option.to_lowercase().contains(&typed.to_lowercase())
}

/// Applies the typed filter to a sourced option list.
pub fn filter_options<'a>(options: &'a [String], typed: &str) -> Vec<&'a str> {
    options
        .iter()
        .filter(|opt| matches_filter(opt, typed))
        .map(String::as_str)
        .collect()
}

/// Whether the surface should offer to accept the typed text verbatim.
///
/// Offered exactly when filtering left nothing to pick and no lookup is
/// still in flight.
#[inline]
pub fn offer_free_text(filtered_count: usize, loading: bool) -> bool {
    filtered_count == 0 && !loading
}

// =============================================================================
// Unit Tests
// =============================================================================
