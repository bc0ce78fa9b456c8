//! # Card State
//!
//! At most one item card is open at the prompt. Opening a card creates a
//! fresh [`ItemConfig`] (and, for spell selectors, its own lookup);
//! closing or replacing it cancels any in-flight lookup so a late
//! response can never touch a card that is gone.

use std::sync::{Arc, Mutex};

use outpost_core::options::OptionSource;
use outpost_core::{ItemConfig, ItemRecord};
use outpost_grimoire::{SpellLookup, SpellSource};

/// One open item card: its configuration state and, for spell selectors,
/// the card-owned lookup.
pub struct OpenCard {
    pub config: ItemConfig,
    pub lookup: Option<SpellLookup>,
}

impl OpenCard {
    /// Opens a card for a record, firing the spell lookup when the card's
    /// options come from the remote index.
    pub fn open(item: ItemRecord, source: &Arc<dyn SpellSource>) -> Self {
        let config = ItemConfig::new(item);

        let lookup = match config.options() {
            OptionSource::Spells => {
                let lookup = SpellLookup::new(Arc::clone(source));
                // A handle comes back for tests; the surface just lets the
                // task land on its own.
                let _ = lookup.request(config.item().note_text());
                Some(lookup)
            }
            _ => None,
        };

        OpenCard { config, lookup }
    }
}

impl Drop for OpenCard {
    fn drop(&mut self) {
        // Discard any in-flight lookup result once the card is gone.
        if let Some(lookup) = &self.lookup {
            lookup.cancel();
        }
    }
}

/// Holder for the (at most one) open card.
#[derive(Default)]
pub struct CardState {
    current: Mutex<Option<OpenCard>>,
}

impl CardState {
    pub fn new() -> Self {
        CardState {
            current: Mutex::new(None),
        }
    }

    /// Replaces the open card, dropping (and thereby cancelling) the
    /// previous one.
    pub fn replace(&self, card: OpenCard) {
        *self.current.lock().expect("card mutex poisoned") = Some(card);
    }

    /// Closes the open card, if any.
    pub fn close(&self) {
        *self.current.lock().expect("card mutex poisoned") = None;
    }

    /// Runs a closure with read access to the open card.
    pub fn with_card<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&OpenCard) -> R,
    {
        let guard = self.current.lock().expect("card mutex poisoned");
        guard.as_ref().map(f)
    }

    /// Runs a closure with write access to the open card.
    pub fn with_card_mut<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut OpenCard) -> R,
    {
        let mut guard = self.current.lock().expect("card mutex poisoned");
        guard.as_mut().map(f)
    }
}
