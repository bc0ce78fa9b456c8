//! # Stash Commands
//!
//! Committing a configured card and viewing the running order.
//!
//! ## Commit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  `add`                                                                  │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  commit gate (outpost-core)                                             │
//! │    ├── invalid ──► typed refusal; prompt shows "Select Option"          │
//! │    └── valid ────► CartLine appended, card state reset                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use outpost_core::format_gp;

use crate::error::{AppError, AppResult};
use crate::state::{CardState, StashState, StashTotals};

/// One committed line, rendered for the prompt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineView {
    pub display_name: String,
    pub variant: Option<String>,
    pub display_price: String,
}

/// The running order with its footer numbers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StashView {
    pub lines: Vec<LineView>,
    pub count: usize,
    /// Grouped total; zero stays "0" here (a real sum, not a price tag).
    pub display_total: String,
}

/// Commits the open card to the stash.
///
/// The commit gate refuses while the card still needs a choice; the card
/// stays open and configured either way, and on success its state resets
/// for a second purchase.
pub fn add_to_stash(cards: &CardState, stash: &StashState) -> AppResult<LineView> {
    let line = cards
        .with_card_mut(|card| card.config.commit())
        .ok_or(AppError::NoOpenCard)??;

    info!(line = %line.display_name, price = line.final_price, "line stashed");

    let view = LineView {
        display_name: line.display_name.clone(),
        variant: line.variant.clone(),
        display_price: format_gp(line.final_price),
    };
    stash.with_stash_mut(|s| s.push(line));
    Ok(view)
}

/// The running order and totals.
pub fn stash_view(stash: &StashState) -> StashView {
    debug!("stash_view command");
    stash.with_stash(|s| {
        let totals = StashTotals::from(s);
        StashView {
            lines: s
                .lines()
                .iter()
                .map(|l| LineView {
                    display_name: l.display_name.clone(),
                    variant: l.variant.clone(),
                    display_price: format_gp(l.final_price),
                })
                .collect(),
            count: totals.count,
            display_total: format_gp(totals.total),
        }
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
