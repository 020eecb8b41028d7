//! # Shared Types Crate
//!
//! This crate contains the character data model, the navigation payload
//! codec and the ports every catalog crate depends on.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Immutable Characters**: A `Character` is never mutated after it is
//!   received from the network; screens copy it, they do not edit it.
//! - **Explicit Keys**: Nothing in this crate reads API keys from ambient
//!   state; credentials travel inside configuration structures.
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | `entities` | `Character`, `Thumbnail`, `CharacterResponse`, thumbnail URLs |
//! | `navigation` | JSON payload handed from the list screen to the detail screen |
//! | `errors` | `CatalogError` |
//! | `ports` | `CharacterApi` (driven) and `ProgressListener` (callback) |
//! | `subscription` | `CancellationGroup` and `RequestHandle` |

pub mod entities;
pub mod errors;
pub mod navigation;
pub mod ports;
pub mod subscription;

pub use entities::*;
pub use errors::*;
pub use navigation::{from_navigation_payload, to_navigation_payload};
pub use ports::{CharacterApi, ProgressListener};
pub use subscription::{CancellationGroup, CancellationToken, RequestHandle};
