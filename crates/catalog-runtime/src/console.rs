//! # Console Adapters
//!
//! Terminal stand-ins for the screen collaborators:
//!
//! - `LoggingObserver` implements `ListObserver` by logging list changes.
//! - `ProgressTracker` implements `ProgressListener` and keeps the
//!   "request in progress" count a spinner would bind to.

use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tracing::{info, warn};

use mc_02_character_list::ListObserver;
use shared_types::{CatalogError, Character, CharacterResponse, ProgressListener};

/// Logs every list notification.
#[derive(Debug, Default)]
pub struct LoggingObserver {
    notifications: AtomicUsize,
}

impl LoggingObserver {
    pub fn notifications(&self) -> usize {
        self.notifications.load(Ordering::SeqCst)
    }
}

impl ListObserver for LoggingObserver {
    fn data_set_changed(&self, items: &[Character]) {
        self.notifications.fetch_add(1, Ordering::SeqCst);
        info!(rows = items.len(), "List refreshed");
    }

    fn item_range_changed(&self, range: Range<usize>, items: &[Character]) {
        self.notifications.fetch_add(1, Ordering::SeqCst);
        info!(rows = items.len(), changed = ?range, "List rows changed");
    }
}

/// Tracks outstanding requests and the last failure.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    in_progress: AtomicUsize,
    completed: AtomicUsize,
    last_error: Mutex<Option<CatalogError>>,
}

impl ProgressTracker {
    /// Mark a request as started. Paired with `end_call_progress`.
    pub fn begin(&self) {
        self.in_progress.fetch_add(1, Ordering::SeqCst);
    }

    pub fn in_progress(&self) -> usize {
        self.in_progress.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn last_error(&self) -> Option<CatalogError> {
        self.last_error.lock().clone()
    }

    /// Forget requests that were cancelled and will never report back.
    pub fn reset(&self) {
        self.in_progress.store(0, Ordering::SeqCst);
    }
}

impl ProgressListener for ProgressTracker {
    fn end_call_progress(&self, outcome: Result<&CharacterResponse, &CatalogError>) {
        // Saturate so an unpaired callback cannot wrap the counter.
        let _ = self
            .in_progress
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_sub(1)));
        self.completed.fetch_add(1, Ordering::SeqCst);

        if let Err(err) = outcome {
            warn!(error = %err, "Request finished with error");
            *self.last_error.lock() = Some(err.clone());
        }
    }
}
