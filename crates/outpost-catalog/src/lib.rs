//! # outpost-catalog: Inventory Ingestion
//!
//! Reads the shop's tabular inventory sheet into [`ItemRecord`]s.
//!
//! The sheet is an external collaborator: this crate trusts its header
//! shape, stays lenient about row contents (see [`loader`]), and routes
//! every raw cost cell through the one [`Cost`](outpost_core::Cost)
//! conversion boundary.
//!
//! Output order is file order - "catalog order" for the stable-sort tie
//! rule downstream.

pub mod error;
pub mod loader;

pub use error::CatalogError;
pub use loader::{load_catalog, parse_catalog};
