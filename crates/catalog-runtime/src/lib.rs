//! # Character Catalog Runtime
//!
//! Wires the catalog crates together for the command-line entry point.
//!
//! ## Modular Structure
//!
//! - `config` - `CatalogConfig` and environment overrides
//! - `console` - terminal implementations of the screen callbacks
//! - `app` - one browsing session: list, paginate, search, open detail
//!
//! ## Wiring
//!
//! ```text
//! CatalogConfig ──→ MarvelHttpClient (CharacterApi)
//!       │                  │
//!       └→ RequestSigner ──┼──→ CharacterListController ──→ LoggingObserver
//!                          │            │ navigation payload
//!                          └──→ CharacterDetailController
//!                                       │
//!                              ProgressTracker (both)
//! ```

pub mod app;
pub mod config;
pub mod console;

pub use app::{BrowsePlan, BrowseReport, CatalogApp, CharacterRow, DetailView};
pub use config::{load_config, CatalogConfig, ConfigError};
pub use console::{LoggingObserver, ProgressTracker};
