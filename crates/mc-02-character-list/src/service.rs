//! # Character List Controller
//!
//! Orchestrates list state, the `CharacterApi` port and the display adapter.
//!
//! ## Request Flow
//!
//! ```text
//! load_initial()/load_more()
//!   │  sign_now() + spawn on the cancellation group
//!   ↓
//! CharacterApi round-trip (background task)
//!   ↓
//! deliver() ──cancelled──→ Err(Cancelled), no callbacks
//!   │
//!   ├─ Ok  → mutate state → ListObserver → ProgressListener
//!   └─ Err → log          →               ProgressListener
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info};

use mc_01_request_signing::RequestSigner;
use shared_types::{
    CancellationGroup, CatalogError, Character, CharacterApi, CharacterResponse,
    ProgressListener, RequestHandle,
};

use crate::domain::{CharacterListState, ListConfig, ListSnapshot};
use crate::ports::ListObserver;

/// Deferred observer notification, run after the state lock is released.
type Notification = Box<dyn FnOnce() + Send>;

/// Owns one list screen's state. Not shared across screens.
pub struct CharacterListController {
    api: Arc<dyn CharacterApi>,
    signer: RequestSigner,
    observer: Arc<dyn ListObserver>,
    state: Arc<Mutex<CharacterListState>>,
    subscriptions: Arc<CancellationGroup>,
}

impl CharacterListController {
    pub fn new(
        api: Arc<dyn CharacterApi>,
        signer: RequestSigner,
        observer: Arc<dyn ListObserver>,
        config: ListConfig,
    ) -> Self {
        Self {
            api,
            signer,
            observer,
            state: Arc::new(Mutex::new(CharacterListState::new(&config))),
            subscriptions: Arc::new(CancellationGroup::new()),
        }
    }

    /// Request the first page.
    ///
    /// On success the original list is replaced and the cursor is set to the
    /// limit the server confirmed. On failure nothing changes.
    pub fn load_initial(&self, listener: Arc<dyn ProgressListener>) -> RequestHandle<ListSnapshot> {
        let limit = self.state.lock().initial_limit();
        debug!(limit, "Requesting initial character page");

        self.request(limit, listener, |state, observer, response| {
            state.apply_initial(response);
            let snapshot = state.snapshot();
            info!(
                loaded = snapshot.original.len(),
                cursor = snapshot.cursor,
                "Initial character page loaded"
            );
            let notify: Notification =
                Box::new(move || observer.data_set_changed(&snapshot.displayed));
            notify
        })
    }

    /// Request one more page (`cursor + page_size` characters from offset 0).
    ///
    /// The cursor advances only after the response arrives successfully.
    pub fn load_more(&self, listener: Arc<dyn ProgressListener>) -> RequestHandle<ListSnapshot> {
        let limit = self.state.lock().next_limit();
        debug!(limit, "Requesting next character page");

        self.request(limit, listener, |state, observer, response| {
            let range = state.apply_page(response);
            let snapshot = state.snapshot();
            info!(
                loaded = snapshot.original.len(),
                cursor = snapshot.cursor,
                range = ?range,
                "Character page loaded"
            );
            let notify: Notification = if snapshot.filter_term.is_some() {
                // Row indices of a filtered list do not line up with pages.
                Box::new(move || observer.data_set_changed(&snapshot.displayed))
            } else {
                Box::new(move || observer.item_range_changed(range, &snapshot.displayed))
            };
            notify
        })
    }

    /// Narrow the displayed list to names containing `term`.
    ///
    /// A blank term restores the original list. Returns the new displayed list.
    ///
    /// Runs under the dispatch lock, so a page delivered concurrently is
    /// notified either entirely before or entirely after this change.
    pub fn filter(&self, term: &str) -> Vec<Character> {
        self.subscriptions.dispatch(|| {
            let displayed = {
                let mut state = self.state.lock();
                state.apply_filter(term);
                state.displayed().to_vec()
            };
            debug!(term = term.trim(), matches = displayed.len(), "Filter applied");
            self.observer.data_set_changed(&displayed);
            displayed
        })
    }

    /// Cancel every in-flight request. Idempotent.
    ///
    /// The controller stays usable: the next load allocates a fresh group.
    pub fn unsubscribe(&self) {
        let pending = self.subscriptions.pending();
        self.subscriptions.cancel_all();
        if pending > 0 {
            info!(pending, "Character list requests cancelled");
        }
    }

    pub fn displayed(&self) -> Vec<Character> {
        self.state.lock().displayed().to_vec()
    }

    pub fn original(&self) -> Vec<Character> {
        self.state.lock().original().to_vec()
    }

    /// Pagination position: the next `load_more` requests `cursor + page_size`.
    ///
    /// Advanced once per successful page, so overlapping `load_more` calls can
    /// move it past the number of characters actually loaded.
    pub fn cursor(&self) -> u32 {
        self.state.lock().cursor()
    }

    pub fn filter_term(&self) -> Option<String> {
        self.state.lock().filter_term().map(str::to_string)
    }

    pub fn snapshot(&self) -> ListSnapshot {
        self.state.lock().snapshot()
    }

    /// Number of requests still in flight.
    pub fn pending_requests(&self) -> usize {
        self.subscriptions.pending()
    }

    fn request<A>(
        &self,
        limit: u32,
        listener: Arc<dyn ProgressListener>,
        apply: A,
    ) -> RequestHandle<ListSnapshot>
    where
        A: FnOnce(
                &mut CharacterListState,
                Arc<dyn ListObserver>,
                &CharacterResponse,
            ) -> Notification
            + Send
            + 'static,
    {
        let signed = self.signer.sign_now();
        let api = self.api.clone();
        let observer = self.observer.clone();
        let state = self.state.clone();
        let subscriptions = self.subscriptions.clone();

        self.subscriptions.spawn(move |token| async move {
            let result = api
                .get_characters(&signed.timestamp, &signed.public_key, &signed.hash, limit)
                .await;

            subscriptions
                .deliver(&token, move || match result {
                    Ok(response) => {
                        let (notify, snapshot) = {
                            let mut state = state.lock();
                            let notify = apply(&mut *state, observer, &response);
                            (notify, state.snapshot())
                        };
                        notify();
                        listener.end_call_progress(Ok(&response));
                        Ok(snapshot)
                    }
                    Err(err) => {
                        error!(limit, error = %err, "Character list request failed");
                        listener.end_call_progress(Err(&err));
                        Err(err)
                    }
                })
                .and_then(|outcome| outcome)
        })
    }
}

impl Drop for CharacterListController {
    fn drop(&mut self) {
        self.subscriptions.cancel_all();
    }
}
