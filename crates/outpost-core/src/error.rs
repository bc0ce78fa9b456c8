//! # Error Types
//!
//! Domain-specific error types for outpost-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  outpost-core errors (this file)                                        │
//! │  └── ConfigError     - configuration/commit-gate violations             │
//! │                                                                         │
//! │  outpost-catalog errors (separate crate)                                │
//! │  └── CatalogError    - inventory file failures                          │
//! │                                                                         │
//! │  apps/terminal errors                                                   │
//! │  └── AppError        - what the user sees at the prompt                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are enum variants with context, never bare strings.

use thiserror::Error;

// =============================================================================
// Config Error
// =============================================================================

/// Configuration and commit-gate violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Commit attempted while the card still needs a choice.
    /// The surface renders this as a disabled action, not a message.
    #[error("{item} requires a selection before it can be stashed")]
    SelectionRequired { item: String },

    /// Base-armor pick that is not in the eligible list for this card
    /// (unknown name, a shield, or Hide under the Mithral rule).
    #[error("'{name}' is not an eligible base armor for {item}")]
    IneligibleArmor { item: String, name: String },

    /// Base-armor pick on a card that is not in armor-math mode.
    #[error("{item} does not take a base armor")]
    NotArmorMath { item: String },

    /// Free-text inscription that is empty after trimming.
    #[error("inscription cannot be empty")]
    EmptyInscription,
}

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
