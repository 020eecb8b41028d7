//! Ports Layer
//!
//! Driven port for the time source. Tests inject a fixed clock so
//! signatures are reproducible.

/// Wall-clock source (Driven Port)
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}
