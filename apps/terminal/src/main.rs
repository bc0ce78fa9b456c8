//! # Outpost Terminal
//!
//! Entry point for the interactive shop terminal.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging                                                  │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Read Configuration                                                  │
//! │     • OUTPOST_CATALOG / OUTPOST_SPELL_API env overrides                 │
//! │                                                                         │
//! │  3. Load the Inventory Sheet                                            │
//! │     • CSV → Vec<ItemRecord>, lenient about rows, strict about headers   │
//! │                                                                         │
//! │  4. Initialize State Objects                                            │
//! │     • BrowseState, CardState, StashState                                │
//! │                                                                         │
//! │  5. Run the Prompt Loop                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod config;
mod error;
mod shell;
mod state;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use outpost_catalog::load_catalog;
use outpost_grimoire::{SpellClient, SpellSource};

use crate::config::AppConfig;
use crate::shell::Shell;
use crate::state::{BrowseState, CardState, StashState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let app_config = AppConfig::from_env();
    info!(?app_config, "starting Outpost terminal");

    let items = load_catalog(&app_config.catalog_path).map_err(error::AppError::from)?;
    info!(count = items.len(), "inventory loaded");

    let spell_source: Arc<dyn SpellSource> =
        Arc::new(SpellClient::new(app_config.spell_api_base.clone()));

    let shell = Shell {
        browse: BrowseState::new(items),
        cards: CardState::new(),
        stash: StashState::new(),
        spell_source,
    };

    shell.run().await?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=outpost=trace` - Trace for outpost crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,outpost=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
