//! # Cancellation Group
//!
//! Each controller owns one `CancellationGroup`: the set of its in-flight
//! requests plus a shared cancelled flag.
//!
//! ## Lifecycle
//!
//! ```text
//! spawn() ──(no live group)──→ allocate fresh group ──→ track task
//! spawn() ──(live group)─────→ prune finished tasks ──→ track task
//! cancel_all() ──────────────→ flag + abort every task ──→ group invalidated
//! ```
//!
//! ## Delivery
//!
//! Tasks publish their results through `deliver()`. `deliver()` and
//! `cancel_all()` serialize on a re-entrant dispatch lock, so once
//! `cancel_all()` returns no callback of a cancelled task is running or will
//! run. The lock is re-entrant so a callback may itself call `cancel_all()`
//! or spawn a new request. Callbacks raised outside a task go through
//! `dispatch()` so they are ordered with deliveries.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use parking_lot::{Mutex, ReentrantMutex};
use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

use crate::errors::CatalogError;

/// Shared cancelled flag handed to every task of one group.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Whether the owning group was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

struct GroupInner {
    token: CancellationToken,
    tasks: Vec<AbortHandle>,
}

impl GroupInner {
    fn new() -> Self {
        Self {
            token: CancellationToken::default(),
            tasks: Vec::new(),
        }
    }
}

/// Composite cancellation handle, lazily recreated after teardown.
pub struct CancellationGroup {
    inner: Mutex<Option<GroupInner>>,
    dispatch: ReentrantMutex<()>,
}

impl Default for CancellationGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationGroup {
    /// Create an empty group. The first `spawn()` allocates it.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
            dispatch: ReentrantMutex::new(()),
        }
    }

    /// Spawn a request task on the runtime and track it.
    ///
    /// The task receives the token of the current group. If the group was
    /// torn down, a fresh one is allocated first.
    pub fn spawn<T, F, Fut>(&self, task: F) -> RequestHandle<T>
    where
        T: Send + 'static,
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = Result<T, CatalogError>> + Send + 'static,
    {
        let mut guard = self.inner.lock();
        let group = guard.get_or_insert_with(|| {
            debug!("Allocating fresh cancellation group");
            GroupInner::new()
        });
        group.tasks.retain(|task| !task.is_finished());

        let join = tokio::spawn(task(group.token.clone()));
        group.tasks.push(join.abort_handle());
        RequestHandle { join }
    }

    /// Run `publish` unless the token was cancelled.
    ///
    /// Returns `Err(Cancelled)` without running `publish` when it was.
    pub fn deliver<R>(
        &self,
        token: &CancellationToken,
        publish: impl FnOnce() -> R,
    ) -> Result<R, CatalogError> {
        self.dispatch(|| {
            if token.is_cancelled() {
                return Err(CatalogError::Cancelled);
            }
            Ok(publish())
        })
    }

    /// Run `publish` under the dispatch lock, ordered with task deliveries.
    ///
    /// For callbacks raised outside a task (a local filter) that must not
    /// interleave with a page being delivered.
    pub fn dispatch<R>(&self, publish: impl FnOnce() -> R) -> R {
        let _dispatch = self.dispatch.lock();
        publish()
    }

    /// Cancel every outstanding task and invalidate the group.
    ///
    /// Idempotent. Safe to call when nothing is in flight.
    pub fn cancel_all(&self) {
        let taken = self.inner.lock().take();
        if let Some(group) = taken {
            group.token.cancel();
            let aborted = group.tasks.len();
            for task in group.tasks {
                task.abort();
            }
            debug!(aborted, "Cancellation group torn down");
        }
        // Wait out any delivery already in progress on another thread.
        drop(self.dispatch.lock());
    }

    /// Number of tracked tasks that have not finished yet.
    pub fn pending(&self) -> usize {
        self.inner
            .lock()
            .as_ref()
            .map(|group| group.tasks.iter().filter(|t| !t.is_finished()).count())
            .unwrap_or(0)
    }

    /// Whether a live group is currently allocated.
    pub fn is_active(&self) -> bool {
        self.inner.lock().is_some()
    }
}

/// Awaitable handle on one spawned request.
///
/// Dropping the handle does not cancel the request; only the owning
/// controller's `unsubscribe()` does.
#[must_use = "await the handle to observe the request outcome"]
pub struct RequestHandle<T> {
    join: JoinHandle<Result<T, CatalogError>>,
}

impl<T> Future for RequestHandle<T> {
    type Output = Result<T, CatalogError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.join).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(err)) if err.is_cancelled() => Poll::Ready(Err(CatalogError::Cancelled)),
            Poll::Ready(Err(err)) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}
