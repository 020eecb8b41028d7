//! Domain Layer - Pure list logic
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod config;
pub mod filter;
pub mod pagination;
pub mod state;

pub use config::{ListConfig, DEFAULT_PAGE_SIZE};
pub use filter::filter_characters;
pub use pagination::PaginationCursor;
pub use state::{CharacterListState, ListSnapshot};
