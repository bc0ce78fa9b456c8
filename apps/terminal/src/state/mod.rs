//! # State Module
//!
//! Application state for the shop terminal.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, we use
//! separate state types:
//!
//! 1. **Separation of Concerns**: each state type has one responsibility
//! 2. **Clearer Command Signatures**: commands declare exactly what they touch
//! 3. **Independence**: per-card state never contends with the stash
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                    │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ BrowseState  │  │  CardState   │  │   StashState     │              │
//! │  │              │  │              │  │                  │              │
//! │  │  loaded      │  │  Mutex<      │  │  Mutex<Stash>    │              │
//! │  │  records +   │  │   Option<    │  │  (append-only    │              │
//! │  │  Mutex query │  │   OpenCard>> │  │   lines)         │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY: write access goes through each state's own Mutex;       │
//! │  no lock is ever held across an await.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod browse;
mod card;
mod stash;

pub use browse::BrowseState;
pub use card::{CardState, OpenCard};
pub use stash::{Stash, StashState, StashTotals};
