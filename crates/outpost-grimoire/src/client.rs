//! # Spell Index Client
//!
//! HTTP client for the remote spell index, behind the [`SpellSource`]
//! seam so the lookup machinery can be driven by a stub in tests.
//!
//! ## Wire Shape
//! ```text
//! GET {base}/spells?level={level}
//!
//! { "results": [ { "index": "magic-missile", "name": "Magic Missile",
//!                  "url": "/api/2014/spells/magic-missile" }, ... ] }
//! ```
//! Only the names are kept, in response order.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Default base URL of the spell index.
pub const DEFAULT_API_BASE: &str = "https://www.dnd5api.co/api/2014";

// =============================================================================
// Source Seam
// =============================================================================

/// A source of spell names by level.
///
/// Implementations degrade to an empty list on failure; the lookup layer
/// never sees an error from this seam.
#[async_trait]
pub trait SpellSource: Send + Sync {
    /// Spell names at the given level (0 = cantrip).
    async fn spells_at_level(&self, level: u32) -> Vec<String>;
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct SpellIndexPage {
    pub(crate) results: Vec<SpellRef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpellRef {
    pub(crate) name: String,
}

// =============================================================================
// Errors (internal)
// =============================================================================

/// Transport or payload failure. Logged, never propagated past the seam.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("spell index request failed: {0}")]
    Http(#[from] reqwest::Error),
}

// =============================================================================
// HTTP Client
// =============================================================================

/// The real spell index client.
#[derive(Debug, Clone)]
pub struct SpellClient {
    http: reqwest::Client,
    base_url: String,
}

impl SpellClient {
    /// Creates a client against the given index base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        SpellClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn try_fetch(&self, level: u32) -> Result<Vec<String>, LookupError> {
        let url = format!("{}/spells?level={}", self.base_url, level);
        debug!(%url, "fetching spell index page");

        let page: SpellIndexPage = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(page.results.into_iter().map(|s| s.name).collect())
    }
}

impl Default for SpellClient {
    fn default() -> Self {
        SpellClient::new(DEFAULT_API_BASE)
    }
}

#[async_trait]
impl SpellSource for SpellClient {
    /// Fetches the names at a level, degrading to an empty list on any
    /// transport or decode failure. The user keeps the free-text fallback
    /// either way.
    async fn spells_at_level(&self, level: u32) -> Vec<String> {
        match self.try_fetch(level).await {
            Ok(names) => names,
            Err(e) => {
                warn!(level, error = %e, "spell index unavailable, degrading to empty list");
                Vec::new()
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_payload_shape() {
        let body = r#"{
            "count": 2,
            "results": [
                { "index": "magic-missile", "name": "Magic Missile", "url": "/api/2014/spells/magic-missile" },
                { "index": "shield", "name": "Shield", "url": "/api/2014/spells/shield" }
            ]
        }"#;

        let page: SpellIndexPage = serde_json::from_str(body).unwrap();
        let names: Vec<String> = page.results.into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Magic Missile", "Shield"]);
    }

    #[test]
    fn test_malformed_payload_fails_decode() {
        assert!(serde_json::from_str::<SpellIndexPage>(r#"{"spells": []}"#).is_err());
    }
}
