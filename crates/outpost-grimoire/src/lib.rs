//! # outpost-grimoire: Dynamic Spell-Option Source
//!
//! Spell-selector cards source their options from a remote spell index.
//! This crate owns everything about that collaboration:
//!
//! - [`level`] - pulling a spell level out of free-form note text
//! - [`client`] - the HTTP client and its degrade-to-empty contract
//! - [`lookup`] - per-card lookup state with last-request-wins semantics
//!
//! ## Race Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Last Request Wins                                    │
//! │                                                                         │
//! │  request A (gen 1) ──────────────────────────► resolves late            │
//! │         request B (gen 2) ──► resolves ──► applied (gen matches)        │
//! │                                                                         │
//! │  A's resolution finds gen 2 ≠ 1 and is discarded. The loading flag      │
//! │  reflects only the most recent in-flight request. cancel() bumps the    │
//! │  generation the same way, so a closed card never sees a late result.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod level;
pub mod lookup;

pub use client::{SpellClient, SpellSource, DEFAULT_API_BASE};
pub use level::spell_level;
pub use lookup::{LookupSnapshot, SpellLookup};
