//! # Card Configuration State
//!
//! Per-card configuration state, the price calculator, and the cart
//! commit gate.
//!
//! ## Card Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Card Configuration Lifecycle                         │
//! │                                                                         │
//! │  open card ──► ItemConfig::new (classifies the record)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  select_armor / select_option / inscribe                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  commit ──► gate check ──► CartLine built ──► state reset               │
//! │                  │                                                      │
//! │                  └── invalid ──► typed refusal (surface disables Add)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each card's state is independent; no locking is needed across cards.
//! Reset after commit lets the same card be configured again for a second
//! purchase.

use chrono::Utc;
use uuid::Uuid;

use crate::armor::find_eligible;
use crate::classify::{classify, ConfigMode};
use crate::cost::display_gp;
use crate::error::{ConfigError, ConfigResult};
use crate::options::{resolve_options, OptionSource};
use crate::types::{CartLine, ItemRecord};

// =============================================================================
// Item Config
// =============================================================================

/// Transient configuration state for one open item card.
///
/// Created when the card opens, reset after a successful commit,
/// discarded when the card closes.
#[derive(Debug, Clone)]
pub struct ItemConfig {
    item: ItemRecord,
    mode: ConfigMode,
    selected_variant: Option<String>,
    price_surcharge: f64,
}

impl ItemConfig {
    /// Opens a card for a catalog record, classifying it on the way in.
    pub fn new(item: ItemRecord) -> Self {
        let mode = classify(&item);
        ItemConfig {
            item,
            mode,
            selected_variant: None,
            price_surcharge: 0.0,
        }
    }

    #[inline]
    pub fn item(&self) -> &ItemRecord {
        &self.item
    }

    #[inline]
    pub fn mode(&self) -> ConfigMode {
        self.mode
    }

    #[inline]
    pub fn selected_variant(&self) -> Option<&str> {
        self.selected_variant.as_deref()
    }

    #[inline]
    pub fn surcharge(&self) -> f64 {
        self.price_surcharge
    }

    /// The option source for this card's mode.
    pub fn options(&self) -> OptionSource {
        resolve_options(&self.item, self.mode)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Picks a base armor by name.
    ///
    /// Validates against the *eligible* list for this card: a shield, Hide
    /// under the Mithral rule, or an unknown name is a typed error and
    /// leaves the state unchanged. On success the armor's cost becomes the
    /// surcharge and its name the selected variant.
    pub fn select_armor(&mut self, name: &str) -> ConfigResult<()> {
        let mithral = match self.mode {
            ConfigMode::ArmorMath { mithral } => mithral,
            _ => {
                return Err(ConfigError::NotArmorMath {
                    item: self.item.name.clone(),
                })
            }
        };

        let armor = find_eligible(name, mithral).ok_or_else(|| ConfigError::IneligibleArmor {
            item: self.item.name.clone(),
            name: name.to_string(),
        })?;

        self.selected_variant = Some(armor.name.to_string());
        self.price_surcharge = armor.cost;
        Ok(())
    }

    /// Picks a sourced option (variant-catalog entry or spell name).
    ///
    /// No surcharge. Sourced and free-text values are equivalent at this
    /// boundary; the spell list is external and not re-validated here.
    pub fn select_option(&mut self, value: &str) {
        self.selected_variant = Some(value.to_string());
    }

    /// Accepts free text typed by the user as the selection, verbatim.
    ///
    /// The only path to a value when the spell index is unavailable,
    /// empty, or incomplete. Trims; empty text is refused.
    pub fn inscribe(&mut self, text: &str) -> ConfigResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ConfigError::EmptyInscription);
        }
        self.selected_variant = Some(text.to_string());
        Ok(())
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// Base price of the record; "Varies" and garbage cells price as zero.
    #[inline]
    pub fn base_price(&self) -> f64 {
        self.item.base_cost.amount()
    }

    /// Base price plus the current armor surcharge.
    #[inline]
    pub fn final_price(&self) -> f64 {
        self.base_price() + self.price_surcharge
    }

    /// Footer rendering of the final price: grouped when positive,
    /// "Varies" at zero.
    pub fn display_price(&self) -> String {
        display_gp(self.final_price())
    }

    // =========================================================================
    // Commit Gate
    // =========================================================================

    /// Whether the card may be committed.
    ///
    /// Plain cards are always valid; configurable cards need a non-empty
    /// selection.
    pub fn is_valid(&self) -> bool {
        self.mode.is_plain()
            || self
                .selected_variant
                .as_deref()
                .is_some_and(|v| !v.is_empty())
    }

    /// Commits the card: builds the stash line and resets the state so the
    /// same card can be configured again.
    ///
    /// Refused with a typed error while [`is_valid`](Self::is_valid) is
    /// false; the surface keeps the action disabled instead of surfacing
    /// the error as a message.
    pub fn commit(&mut self) -> ConfigResult<CartLine> {
        if !self.is_valid() {
            return Err(ConfigError::SelectionRequired {
                item: self.item.name.clone(),
            });
        }

        let variant = self.selected_variant.take();
        let display_name = match &variant {
            Some(v) => format!("{} ({})", self.item.name, v),
            None => self.item.name.clone(),
        };

        let line = CartLine {
            id: Uuid::new_v4().to_string(),
            item: self.item.clone(),
            final_price: self.base_price() + self.price_surcharge,
            variant,
            display_name,
            added_at: Utc::now(),
        };

        self.reset();
        Ok(line)
    }

    /// Clears any selection and surcharge back to the initial empty state.
    pub fn reset(&mut self) {
        self.selected_variant = None;
        self.price_surcharge = 0.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
