//! # Per-Card Lookup State
//!
//! One `SpellLookup` per open selector card. Holds the fetched option
//! list, the loading flag, and the generation token that makes the whole
//! thing last-request-wins.
//!
//! ## Token Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request(note)                                                          │
//! │      │  no parseable level? ──► no task, state untouched                │
//! │      ▼                                                                  │
//! │  generation += 1, loading = true, spawn fetch task (carries gen)        │
//! │      │                                                                  │
//! │      ▼  task resolves                                                   │
//! │  gen still current? ──► yes: apply options, loading = false             │
//! │                     └─► no:  drop result (superseded or cancelled)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cards are independent: each has its own `SpellLookup`, so no lock is
//! shared across cards.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::client::SpellSource;
use crate::level::spell_level;

// =============================================================================
// Lookup State
// =============================================================================

#[derive(Debug, Default)]
struct LookupState {
    /// Token of the most recent request; only a matching completion may
    /// write.
    generation: u64,
    loading: bool,
    options: Vec<String>,
}

/// Read-only view of a lookup for the surface to render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupSnapshot {
    pub loading: bool,
    pub options: Vec<String>,
}

// =============================================================================
// Spell Lookup
// =============================================================================

/// Lookup handle owned by one open selector card.
pub struct SpellLookup {
    source: Arc<dyn SpellSource>,
    state: Arc<Mutex<LookupState>>,
}

impl SpellLookup {
    pub fn new(source: Arc<dyn SpellSource>) -> Self {
        SpellLookup {
            source,
            state: Arc::new(Mutex::new(LookupState::default())),
        }
    }

    /// Issues a lookup for the card's note.
    ///
    /// Returns `None` without touching state when the note has no
    /// parseable level - the option list stays empty pending the free-text
    /// fallback. Otherwise supersedes any in-flight request and returns
    /// the task handle (useful to await in tests; the surface just drops
    /// it).
    pub fn request(&self, note: &str) -> Option<JoinHandle<()>> {
        let level = spell_level(note)?;

        let generation = {
            let mut state = self.state.lock().expect("lookup mutex poisoned");
            state.generation += 1;
            state.loading = true;
            state.generation
        };

        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.state);
        Some(tokio::spawn(async move {
            let options = source.spells_at_level(level).await;

            let mut state = shared.lock().expect("lookup mutex poisoned");
            if state.generation == generation {
                state.options = options;
                state.loading = false;
            } else {
                debug!(generation, "discarding superseded spell lookup result");
            }
        }))
    }

    /// Discards any in-flight request's eventual result.
    ///
    /// Called when the card closes or its mode changes. Options already
    /// applied stay; only the pending write is voided.
    pub fn cancel(&self) {
        let mut state = self.state.lock().expect("lookup mutex poisoned");
        state.generation += 1;
        state.loading = false;
    }

    /// Current view for rendering. The loading flag reflects only the most
    /// recent request.
    pub fn snapshot(&self) -> LookupSnapshot {
        let state = self.state.lock().expect("lookup mutex poisoned");
        LookupSnapshot {
            loading: state.loading,
            options: state.options.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::Notify;

    /// Stub source: responses are gated per level so races are scripted,
    /// not slept for.
    struct GatedSource {
        gates: Vec<(u32, Arc<Notify>)>,
    }

    impl GatedSource {
        fn ungated() -> Self {
            GatedSource { gates: Vec::new() }
        }

        fn gated_at(level: u32) -> (Self, Arc<Notify>) {
            let gate = Arc::new(Notify::new());
            let source = GatedSource {
                gates: vec![(level, Arc::clone(&gate))],
            };
            (source, gate)
        }
    }

    #[async_trait]
    impl SpellSource for GatedSource {
        async fn spells_at_level(&self, level: u32) -> Vec<String> {
            if let Some((_, gate)) = self.gates.iter().find(|(l, _)| *l == level) {
                gate.notified().await;
            }
            vec![format!("spell-of-level-{level}")]
        }
    }

    #[tokio::test]
    async fn test_lookup_applies_result() {
        let lookup = SpellLookup::new(Arc::new(GatedSource::ungated()));

        let handle = lookup.request("Choose a 1st-level spell").unwrap();
        handle.await.unwrap();

        let snap = lookup.snapshot();
        assert!(!snap.loading);
        assert_eq!(snap.options, vec!["spell-of-level-1"]);
    }

    #[tokio::test]
    async fn test_loading_reflects_inflight_request() {
        let (source, gate) = GatedSource::gated_at(1);
        let lookup = SpellLookup::new(Arc::new(source));

        let handle = lookup.request("Choose a 1st-level spell").unwrap();
        assert!(lookup.snapshot().loading);

        gate.notify_one();
        handle.await.unwrap();
        assert!(!lookup.snapshot().loading);
    }

    #[tokio::test]
    async fn test_stale_result_never_overwrites_newer() {
        let (source, gate) = GatedSource::gated_at(1);
        let lookup = SpellLookup::new(Arc::new(source));

        // Slow request for level 1, then a fast one for level 2.
        let slow = lookup.request("Choose a 1st-level spell").unwrap();
        let fast = lookup.request("Choose a 2nd-level spell").unwrap();
        fast.await.unwrap();

        let snap = lookup.snapshot();
        assert!(!snap.loading);
        assert_eq!(snap.options, vec!["spell-of-level-2"]);

        // Now let the stale response land; it must be discarded.
        gate.notify_one();
        slow.await.unwrap();

        let snap = lookup.snapshot();
        assert!(!snap.loading);
        assert_eq!(snap.options, vec!["spell-of-level-2"]);
    }

    #[tokio::test]
    async fn test_cancel_discards_inflight_result() {
        let (source, gate) = GatedSource::gated_at(1);
        let lookup = SpellLookup::new(Arc::new(source));

        let handle = lookup.request("Choose a 1st-level spell").unwrap();
        lookup.cancel();
        assert!(!lookup.snapshot().loading);

        gate.notify_one();
        handle.await.unwrap();
        assert!(lookup.snapshot().options.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_note_issues_no_request() {
        let lookup = SpellLookup::new(Arc::new(GatedSource::ungated()));

        assert!(lookup.request("Choose damage type").is_none());
        let snap = lookup.snapshot();
        assert!(!snap.loading);
        assert!(snap.options.is_empty());
    }

    #[tokio::test]
    async fn test_failure_degrades_to_empty_list() {
        /// A source whose backend is down.
        struct DownSource;

        #[async_trait]
        impl SpellSource for DownSource {
            async fn spells_at_level(&self, _level: u32) -> Vec<String> {
                // The client seam already swallowed the transport error.
                Vec::new()
            }
        }

        let lookup = SpellLookup::new(Arc::new(DownSource));
        let handle = lookup.request("Choose a cantrip").unwrap();
        handle.await.unwrap();

        let snap = lookup.snapshot();
        assert!(!snap.loading);
        assert!(snap.options.is_empty());
    }
}
