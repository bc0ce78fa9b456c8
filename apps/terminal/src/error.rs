//! # Terminal Error Type
//!
//! The boundary error shown at the prompt. Crate errors convert into it;
//! the shell prints the message and keeps going - no command ever takes
//! the terminal down.

use thiserror::Error;

use outpost_catalog::CatalogError;
use outpost_core::ConfigError;

/// Errors surfaced at the prompt.
#[derive(Debug, Error)]
pub enum AppError {
    /// A card command was issued with no card open.
    #[error("no card is open - `open <n>` first")]
    NoOpenCard,

    /// `open` pointed past the end of the visible list.
    #[error("no item at position {0} in the current view")]
    NoSuchItem(usize),

    /// A configuration rule refused the action.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The inventory sheet could not be loaded at startup.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
