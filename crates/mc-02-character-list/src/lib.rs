//! # MC-02 Character List
//!
//! Controller behind the character list screen: initial load, incremental
//! pagination and local search.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure state, no I/O
//!   - `CharacterListState`: original list, displayed list, cursor, search term
//!   - `PaginationCursor`: page arithmetic
//!   - `filter_characters`: case-insensitive name search
//!   - `ListConfig`: page size
//!
//! - **Ports Layer** (`ports/`): `ListObserver` display adapter
//!
//! - **Service Layer** (`service.rs`): `CharacterListController`
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: The displayed list is the original list, or an
//!   order-preserving subsequence of it selected by one search term.
//! - **INVARIANT-2**: The cursor only moves on a successful response. A failed
//!   `load_more()` leaves cursor and lists untouched.
//!
//! ## Usage Example
//!
//! ```ignore
//! let controller = CharacterListController::new(api, signer, observer, ListConfig::default());
//! controller.load_initial(listener.clone()).await?;
//! controller.load_more(listener.clone()).await?;
//! let spiders = controller.filter("spider");
//! controller.unsubscribe();
//! ```

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{filter_characters, CharacterListState, ListConfig, ListSnapshot, PaginationCursor};
pub use ports::{ListObserver, NoOpObserver};
pub use service::CharacterListController;
