//! # Request Signing (MC-01)
//!
//! Produces the per-request authentication hash the character API requires.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure signature function and credentials
//! - **Ports Layer** (`ports/`): `Clock` driven port
//! - **Adapters Layer** (`adapters/`): `SystemClock`, `FixedClock`
//! - **Service Layer** (`service.rs`): `RequestSigner` reads the clock and signs
//!
//! ## Security Notes
//!
//! - MD5 is mandated by the API contract. It authenticates requests, it does
//!   not protect a secret at rest.
//! - The private key never appears in `Debug` output or logs.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{FixedClock, SystemClock};
pub use domain::credentials::ApiCredentials;
pub use domain::signature::{sign, SignedRequest};
pub use ports::Clock;
pub use service::RequestSigner;
