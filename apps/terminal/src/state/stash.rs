//! # Stash State
//!
//! The running order. Append-only for the life of the session: lines go
//! in at commit time and never come back out.
//!
//! ## Stash Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prompt Action            Command                Stash Change           │
//! │  ─────────────            ───────                ────────────           │
//! │  `add` on a valid card ──► add_to_stash() ─────► lines.push(line)       │
//! │  `stash` ────────────────► stash_view() ───────► (read only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use serde::Serialize;

use outpost_core::CartLine;

/// The running order. Lines are immutable once appended.
#[derive(Debug, Default)]
pub struct Stash {
    lines: Vec<CartLine>,
}

impl Stash {
    pub fn new() -> Self {
        Stash::default()
    }

    /// Appends a committed line.
    pub fn push(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of committed lines.
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of committed final prices, in gp.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(|l| l.final_price).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Stash totals summary for the prompt footer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StashTotals {
    pub count: usize,
    pub total: f64,
}

impl From<&Stash> for StashTotals {
    fn from(stash: &Stash) -> Self {
        StashTotals {
            count: stash.count(),
            total: stash.total(),
        }
    }
}

/// Session-managed stash state.
#[derive(Debug, Default)]
pub struct StashState {
    stash: Mutex<Stash>,
}

impl StashState {
    pub fn new() -> Self {
        StashState {
            stash: Mutex::new(Stash::new()),
        }
    }

    /// Executes a function with read access to the stash.
    pub fn with_stash<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Stash) -> R,
    {
        let stash = self.stash.lock().expect("stash mutex poisoned");
        f(&stash)
    }

    /// Executes a function with write access to the stash.
    pub fn with_stash_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Stash) -> R,
    {
        let mut stash = self.stash.lock().expect("stash mutex poisoned");
        f(&mut stash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use outpost_core::{Cost, ItemRecord, Rarity};

    fn test_line(name: &str, price: f64) -> CartLine {
        CartLine {
            id: format!("line-{name}"),
            item: ItemRecord {
                name: name.to_string(),
                kind: "Wondrous item".to_string(),
                category: "Wondrous".to_string(),
                rarity: Rarity::Uncommon,
                base_cost: Cost::Numeric(price),
                note: None,
            },
            final_price: price,
            variant: None,
            display_name: name.to_string(),
            added_at: Utc::now(),
        }
    }

    #[test]
    fn test_totals_track_appends() {
        let state = StashState::new();
        assert_eq!(state.with_stash(|s| StashTotals::from(s)).count, 0);

        state.with_stash_mut(|s| s.push(test_line("Bag of holding", 500.0)));
        state.with_stash_mut(|s| s.push(test_line("Potion of healing", 50.0)));

        let totals = state.with_stash(|s| StashTotals::from(s));
        assert_eq!(totals.count, 2);
        assert_eq!(totals.total, 550.0);
    }

    #[test]
    fn test_lines_keep_commit_order() {
        let state = StashState::new();
        state.with_stash_mut(|s| s.push(test_line("First", 1.0)));
        state.with_stash_mut(|s| s.push(test_line("Second", 2.0)));

        let names =
            state.with_stash(|s| s.lines().iter().map(|l| l.display_name.clone()).collect::<Vec<_>>());
        assert_eq!(names, vec!["First", "Second"]);
    }
}
