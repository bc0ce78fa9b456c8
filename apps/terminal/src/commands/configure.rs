//! # Configure Commands
//!
//! Card-side commands: open a card from the visible list, inspect its
//! options, make a selection.
//!
//! ## Card Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  `open 3` ──► classify record ──► (spell selector? fire lookup)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  `options [filter]` ──► sourced list, filtered by typed text            │
//! │       │                  └─ zero left & not loading ──► inscribe offer  │
//! │       ▼                                                                 │
//! │  `pick <value>` / `inscribe <text>` ──► selection recorded              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use outpost_core::options::{filter_options, offer_free_text, OptionSource};
use outpost_core::{format_gp, ConfigMode};
use outpost_grimoire::{LookupSnapshot, SpellSource};

use crate::error::{AppError, AppResult};
use crate::state::{BrowseState, CardState, OpenCard};

// =============================================================================
// Views
// =============================================================================

/// Card header for the prompt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub name: String,
    /// Selector label: name truncated at the first comma.
    pub label: String,
    pub mode: ConfigMode,
    pub note: Option<String>,
    pub selected: Option<String>,
    pub display_price: String,
    /// Whether `add` would currently be enabled.
    pub valid: bool,
}

/// The option list as currently presentable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsView {
    /// Options left after the typed filter.
    pub options: Vec<String>,
    /// A lookup is still in flight; the surface shows the summoning line.
    pub loading: bool,
    /// Offer to accept the typed text verbatim.
    pub offer_inscribe: bool,
    /// What the user had typed when the view was built.
    pub typed: String,
}

// =============================================================================
// Commands
// =============================================================================

/// Opens the card at a 1-based position in the current visible list.
///
/// Replaces any previously open card (cancelling its lookup). Spell
/// selectors fire their lookup immediately so options are usually there
/// by the first `options` call.
pub fn open_card(
    cards: &CardState,
    browse: &BrowseState,
    source: &Arc<dyn SpellSource>,
    position: usize,
) -> AppResult<CardView> {
    let visible = browse.visible();
    let item = position
        .checked_sub(1)
        .and_then(|i| visible.get(i))
        .ok_or(AppError::NoSuchItem(position))?;

    debug!(item = %item.name, position, "open_card command");
    let card = OpenCard::open((*item).clone(), source);
    let view = card_view(&card);
    cards.replace(card);
    Ok(view)
}

/// Re-renders the open card's header.
pub fn card(cards: &CardState) -> AppResult<CardView> {
    cards.with_card(card_view).ok_or(AppError::NoOpenCard)
}

/// The open card's option list under a typed filter.
///
/// Armor lists are fixed and never offer the inscribe fallback; selector
/// lists filter case-insensitively and fall back to inscribe when nothing
/// is left and no lookup is in flight.
pub fn options(cards: &CardState, typed: &str) -> AppResult<OptionsView> {
    cards
        .with_card(|card| {
            let (sourced, loading) = match card.config.options() {
                OptionSource::Armor(armors) => {
                    let rendered = armors
                        .iter()
                        .map(|a| format!("{} (+{} gp)", a.name, format_gp(a.cost)))
                        .collect();
                    return OptionsView {
                        options: rendered,
                        loading: false,
                        offer_inscribe: false,
                        typed: typed.to_string(),
                    };
                }
                OptionSource::Fixed(opts) => {
                    (opts.iter().map(|o| o.to_string()).collect::<Vec<_>>(), false)
                }
                OptionSource::Spells => {
                    let snap = card
                        .lookup
                        .as_ref()
                        .map(|l| l.snapshot())
                        .unwrap_or_else(|| LookupSnapshot {
                            loading: false,
                            options: Vec::new(),
                        });
                    (snap.options, snap.loading)
                }
                OptionSource::None => (Vec::new(), false),
            };

            let filtered: Vec<String> = filter_options(&sourced, typed)
                .into_iter()
                .map(|s| s.to_string())
                .collect();
            let offer_inscribe = offer_free_text(filtered.len(), loading);

            OptionsView {
                options: filtered,
                loading,
                offer_inscribe,
                typed: typed.to_string(),
            }
        })
        .ok_or(AppError::NoOpenCard)
}

/// Records a selection on the open card.
///
/// Armor-math cards validate the pick against the eligible armor list;
/// selector cards accept the value as-is (sourced options and free text
/// are equivalent at this boundary).
pub fn pick(cards: &CardState, value: &str) -> AppResult<CardView> {
    cards
        .with_card_mut(|card| {
            match card.config.mode() {
                ConfigMode::ArmorMath { .. } => card.config.select_armor(value)?,
                _ => card.config.select_option(value),
            }
            Ok(card_view(card))
        })
        .ok_or(AppError::NoOpenCard)?
}

/// Accepts free text as the selection on the open card.
pub fn inscribe(cards: &CardState, text: &str) -> AppResult<CardView> {
    cards
        .with_card_mut(|card| {
            card.config.inscribe(text)?;
            Ok(card_view(card))
        })
        .ok_or(AppError::NoOpenCard)?
}

/// Closes the open card, discarding its lookup.
pub fn close(cards: &CardState) {
    debug!("close_card command");
    cards.close();
}

fn card_view(card: &OpenCard) -> CardView {
    let config = &card.config;
    let item = config.item();
    CardView {
        name: item.name.clone(),
        label: item.short_name().to_string(),
        mode: config.mode(),
        note: item.note.clone(),
        selected: config.selected_variant().map(|s| s.to_string()),
        display_price: config.display_price(),
        valid: config.is_valid(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use outpost_core::{Cost, ItemRecord, Rarity};

    struct FixedSource(Vec<String>);

    #[async_trait]
    impl SpellSource for FixedSource {
        async fn spells_at_level(&self, _level: u32) -> Vec<String> {
            self.0.clone()
        }
    }

    fn browse_with(items: Vec<ItemRecord>) -> BrowseState {
        BrowseState::new(items)
    }

    fn test_item(name: &str, note: Option<&str>, cost: Cost) -> ItemRecord {
        ItemRecord {
            name: name.to_string(),
            kind: "Wondrous item".to_string(),
            category: "Wondrous".to_string(),
            rarity: Rarity::Uncommon,
            base_cost: cost,
            note: note.map(|n| n.to_string()),
        }
    }

    fn empty_source() -> Arc<dyn SpellSource> {
        Arc::new(FixedSource(Vec::new()))
    }

    #[tokio::test]
    async fn test_open_out_of_range_is_refused() {
        let browse = browse_with(vec![test_item("Bag of holding", None, Cost::Numeric(500.0))]);
        let cards = CardState::new();

        assert!(matches!(
            open_card(&cards, &browse, &empty_source(), 0),
            Err(AppError::NoSuchItem(0))
        ));
        assert!(matches!(
            open_card(&cards, &browse, &empty_source(), 2),
            Err(AppError::NoSuchItem(2))
        ));
    }

    #[tokio::test]
    async fn test_fixed_selector_options_filter_and_fallback() {
        let browse = browse_with(vec![test_item(
            "Potion of resistance",
            Some("Choose damage type"),
            Cost::Numeric(50.0),
        )]);
        let cards = CardState::new();
        open_card(&cards, &browse, &empty_source(), 1).unwrap();

        let view = options(&cards, "").unwrap();
        assert_eq!(view.options.len(), 10);
        assert!(!view.offer_inscribe);

        let view = options(&cards, "fi").unwrap();
        assert_eq!(view.options, vec!["Fire"]);

        let view = options(&cards, "sonic").unwrap();
        assert!(view.options.is_empty());
        assert!(view.offer_inscribe);
    }

    #[tokio::test]
    async fn test_armor_options_render_with_surcharge_and_no_fallback() {
        let browse = browse_with(vec![test_item(
            "Mithral Armor",
            Some("base metal armor cost"),
            Cost::Numeric(0.0),
        )]);
        let cards = CardState::new();
        open_card(&cards, &browse, &empty_source(), 1).unwrap();

        let view = options(&cards, "").unwrap();
        assert_eq!(view.options.len(), 8);
        assert!(view.options.contains(&"Plate (+1,500 gp)".to_string()));
        assert!(!view.offer_inscribe);
    }

    #[tokio::test]
    async fn test_pick_routes_by_mode() {
        let browse = browse_with(vec![
            test_item("Mithral Armor", Some("base metal armor cost"), Cost::Numeric(0.0)),
            test_item("Potion of resistance", Some("Choose damage type"), Cost::Numeric(50.0)),
        ]);
        let cards = CardState::new();

        open_card(&cards, &browse, &empty_source(), 1).unwrap();
        let view = pick(&cards, "Breastplate").unwrap();
        assert_eq!(view.selected.as_deref(), Some("Breastplate"));
        assert_eq!(view.display_price, "400");
        assert!(view.valid);

        // Ineligible names bounce with the card untouched.
        assert!(pick(&cards, "Shield").is_err());

        open_card(&cards, &browse, &empty_source(), 2).unwrap();
        let view = pick(&cards, "Fire").unwrap();
        assert_eq!(view.selected.as_deref(), Some("Fire"));
        assert_eq!(view.display_price, "50");
    }

    #[tokio::test]
    async fn test_spell_card_uses_lookup_then_inscribe_fallback() {
        let browse = browse_with(vec![test_item(
            "Spell scroll (1st level)",
            Some("Choose a 1st-level spell"),
            Cost::Numeric(120.0),
        )]);
        let cards = CardState::new();

        // Source returns nothing (index down or empty level).
        open_card(&cards, &browse, &empty_source(), 1).unwrap();
        // Let the fired lookup settle.
        tokio::task::yield_now().await;

        let view = options(&cards, "").unwrap();
        if !view.loading {
            assert!(view.options.is_empty());
            assert!(view.offer_inscribe);
        }

        let view = inscribe(&cards, "Witch Bolt").unwrap();
        assert_eq!(view.selected.as_deref(), Some("Witch Bolt"));
        assert!(view.valid);
    }

    #[tokio::test]
    async fn test_commands_without_open_card_are_refused() {
        let cards = CardState::new();
        assert!(matches!(options(&cards, ""), Err(AppError::NoOpenCard)));
        assert!(matches!(pick(&cards, "Fire"), Err(AppError::NoOpenCard)));
        assert!(matches!(inscribe(&cards, "x"), Err(AppError::NoOpenCard)));
    }
}
