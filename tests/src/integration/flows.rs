//! # Catalog Flows
//!
//! The list and detail controllers working together over an in-memory
//! `CharacterApi`, the way the two screens use them:
//!
//! 1. **Initial load → pagination**: cursor and observer notifications
//! 2. **Search**: filtered view survives later pages
//! 3. **Navigation**: displayed row → JSON payload → detail controller
//! 4. **Unsubscribe**: in-flight requests never reach observers or listeners

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use parking_lot::Mutex;
    use tokio::sync::Notify;
    use tokio::time::timeout;

    use mc_01_request_signing::{sign, ApiCredentials, FixedClock, RequestSigner};
    use mc_02_character_list::{CharacterListController, ListConfig};
    use mc_03_character_detail::CharacterDetailController;
    use shared_types::{
        to_navigation_payload, CatalogError, Character, CharacterApi, CharacterId,
        CharacterResponse,
    };

    use crate::integration::support::{
        roster, Notice, RecordingListener, RecordingObserver, FIXED_MILLIS, PRIVATE_KEY,
        PUBLIC_KEY,
    };

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// In-memory API that checks signatures and can hold requests at a gate.
    struct InMemoryApi {
        roster: Vec<Character>,
        max_limit: u32,
        gate: Option<Arc<Notify>>,
        list_calls: AtomicUsize,
        detail_calls: AtomicUsize,
        requested_limits: Mutex<Vec<u32>>,
    }

    impl InMemoryApi {
        fn new(roster: Vec<Character>) -> Self {
            Self {
                roster,
                max_limit: 100,
                gate: None,
                list_calls: AtomicUsize::new(0),
                detail_calls: AtomicUsize::new(0),
                requested_limits: Mutex::new(Vec::new()),
            }
        }

        fn with_max_limit(mut self, max_limit: u32) -> Self {
            self.max_limit = max_limit;
            self
        }

        fn with_gate(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }

        fn check_signature(&self, timestamp: &str, public_key: &str, hash: &str) -> Result<(), CatalogError> {
            if public_key != PUBLIC_KEY || hash != sign(timestamp, PRIVATE_KEY, PUBLIC_KEY) {
                return Err(CatalogError::Http {
                    status: 401,
                    message: "InvalidCredentials: The passed API key is invalid.".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CharacterApi for InMemoryApi {
        async fn get_characters(
            &self,
            timestamp: &str,
            public_key: &str,
            hash: &str,
            limit: u32,
        ) -> Result<CharacterResponse, CatalogError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            self.requested_limits.lock().push(limit);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.check_signature(timestamp, public_key, hash)?;

            if limit > self.max_limit {
                return Err(CatalogError::Http {
                    status: 409,
                    message: "You may not request more than 100 items.".to_string(),
                });
            }
            let results = self.roster.iter().take(limit as usize).cloned().collect();
            Ok(CharacterResponse::from_results(results, limit))
        }

        async fn get_character_detail(
            &self,
            id: CharacterId,
            timestamp: &str,
            public_key: &str,
            hash: &str,
        ) -> Result<CharacterResponse, CatalogError> {
            self.detail_calls.fetch_add(1, Ordering::SeqCst);
            self.check_signature(timestamp, public_key, hash)?;

            let found: Vec<Character> = self.roster.iter().filter(|c| c.id == id).cloned().collect();
            if found.is_empty() {
                return Err(CatalogError::Http {
                    status: 404,
                    message: "We couldn't find that character".to_string(),
                });
            }
            Ok(CharacterResponse::from_results(found, 20))
        }
    }

    fn signer() -> RequestSigner {
        RequestSigner::new(
            ApiCredentials::new(PUBLIC_KEY, PRIVATE_KEY),
            Arc::new(FixedClock::new(FIXED_MILLIS)),
        )
    }

    fn list_controller(
        api: Arc<InMemoryApi>,
        observer: Arc<RecordingObserver>,
    ) -> CharacterListController {
        CharacterListController::new(api, signer(), observer, ListConfig::default())
    }

    async fn wait_for_calls(api: &InMemoryApi, calls: usize) {
        timeout(Duration::from_secs(5), async {
            while api.list_calls.load(Ordering::SeqCst) < calls {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("request never reached the API");
    }

    // =========================================================================
    // INTEGRATION TESTS: LIST → SEARCH → DETAIL
    // =========================================================================

    #[tokio::test]
    async fn test_browse_search_and_open_detail() {
        let api = Arc::new(InMemoryApi::new(roster(80)));
        let observer = Arc::new(RecordingObserver::default());
        let listener = Arc::new(RecordingListener::default());
        let list = list_controller(api.clone(), observer.clone());

        // Initial page
        let snapshot = list.load_initial(listener.clone()).await.unwrap();
        assert_eq!(snapshot.original.len(), 20);
        assert_eq!(snapshot.cursor, 20);

        // One more page, unfiltered
        let snapshot = list.load_more(listener.clone()).await.unwrap();
        assert_eq!(snapshot.original.len(), 40);
        assert_eq!(snapshot.cursor, 40);

        // Search, then clear it with whitespace
        let matches = list.filter("spider");
        let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Spider-Man", "Spider-Woman"]);
        assert_eq!(list.filter("   ").len(), 40);
        assert_eq!(list.filter_term(), None);

        // Paging with a search active keeps the search applied
        list.filter("SPIDER");
        let snapshot = list.load_more(listener.clone()).await.unwrap();
        assert_eq!(snapshot.cursor, 60);
        assert_eq!(snapshot.original.len(), 60);
        assert_eq!(snapshot.displayed.len(), 2);

        assert_eq!(
            observer.notices(),
            vec![
                Notice::DataSetChanged(20),
                Notice::ItemRangeChanged(20..40),
                Notice::DataSetChanged(2),
                Notice::DataSetChanged(40),
                Notice::DataSetChanged(2),
                Notice::DataSetChanged(2),
            ]
        );
        assert_eq!(*api.requested_limits.lock(), vec![20, 40, 60]);

        // Navigate to the first displayed row
        let payload = to_navigation_payload(&list.displayed()[0]).unwrap();
        let detail = CharacterDetailController::from_payload(Some(&payload), api.clone(), signer()).unwrap();
        assert_eq!(detail.character().name, "Spider-Man");
        assert!(detail.detail_image_url().ends_with("/3/standard_fantastic.jpg"));

        let response = detail.load_detail(listener.clone()).await.unwrap();
        assert_eq!(response.results()[0].id, 1003);
        // Detail results are not merged into the held character
        assert_eq!(detail.character().id, 1003);

        assert_eq!(listener.calls(), 4);
        assert!(listener.errors().is_empty());
        assert_eq!(api.detail_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_page_changes_nothing() {
        let api = Arc::new(InMemoryApi::new(roster(80)).with_max_limit(20));
        let observer = Arc::new(RecordingObserver::default());
        let listener = Arc::new(RecordingListener::default());
        let list = list_controller(api.clone(), observer.clone());

        list.load_initial(listener.clone()).await.unwrap();
        let before = list.snapshot();

        let err = list.load_more(listener.clone()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Http { status: 409, .. }));

        assert_eq!(list.snapshot(), before);
        assert_eq!(observer.notices(), vec![Notice::DataSetChanged(20)]);
        assert_eq!(listener.calls(), 2);
        assert_eq!(listener.errors(), vec![err]);

        // Retrying asks for the same limit again
        let _ = list.load_more(listener.clone()).await;
        assert_eq!(*api.requested_limits.lock(), vec![20, 40, 40]);
    }

    #[tokio::test]
    async fn test_detail_from_bad_payload_never_calls_api() {
        let api = Arc::new(InMemoryApi::new(roster(5)));

        for payload in [None, Some(""), Some(r#"{"id":1}"#)] {
            let result = CharacterDetailController::from_payload(payload, api.clone(), signer());
            assert!(matches!(result, Err(CatalogError::Deserialization(_))));
        }
        assert_eq!(api.detail_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_character_detail_reports_error() {
        let api = Arc::new(InMemoryApi::new(roster(5)));
        let listener = Arc::new(RecordingListener::default());
        let stranger = roster(10).pop().unwrap();

        let detail = CharacterDetailController::new(stranger, api, signer());
        let err = detail.load_detail(listener.clone()).await.unwrap_err();

        assert!(matches!(err, CatalogError::Http { status: 404, .. }));
        assert_eq!(listener.errors(), vec![err]);
    }

    // =========================================================================
    // INTEGRATION TESTS: UNSUBSCRIBE
    // =========================================================================

    #[tokio::test]
    async fn test_unsubscribe_silences_in_flight_request() {
        let gate = Arc::new(Notify::new());
        let api = Arc::new(InMemoryApi::new(roster(40)).with_gate(gate.clone()));
        let observer = Arc::new(RecordingObserver::default());
        let listener = Arc::new(RecordingListener::default());
        let list = list_controller(api.clone(), observer.clone());

        let handle = list.load_initial(listener.clone());
        wait_for_calls(&api, 1).await;

        list.unsubscribe();
        gate.notify_one();

        assert_eq!(handle.await, Err(CatalogError::Cancelled));
        assert!(observer.notices().is_empty());
        assert_eq!(listener.calls(), 0);
        assert!(list.original().is_empty());
        assert_eq!(list.pending_requests(), 0);

        // The controller is usable again after unsubscribing
        let snapshot = list.load_initial(listener.clone()).await.unwrap();
        assert_eq!(snapshot.original.len(), 20);
        assert_eq!(listener.calls(), 1);
    }

    #[tokio::test]
    async fn test_dropping_controller_cancels_requests() {
        let gate = Arc::new(Notify::new());
        let api = Arc::new(InMemoryApi::new(roster(40)).with_gate(gate.clone()));
        let observer = Arc::new(RecordingObserver::default());
        let listener = Arc::new(RecordingListener::default());
        let list = list_controller(api.clone(), observer.clone());

        let handle = list.load_initial(listener.clone());
        drop(list);
        gate.notify_one();

        assert_eq!(handle.await, Err(CatalogError::Cancelled));
        assert!(observer.notices().is_empty());
        assert_eq!(listener.calls(), 0);
    }

    #[tokio::test]
    async fn test_detail_unsubscribe_leaves_list_alone() {
        let api = Arc::new(InMemoryApi::new(roster(40)));
        let observer = Arc::new(RecordingObserver::default());
        let listener = Arc::new(RecordingListener::default());
        let list = list_controller(api.clone(), observer.clone());
        list.load_initial(listener.clone()).await.unwrap();

        let detail = CharacterDetailController::new(list.displayed()[0].clone(), api.clone(), signer());
        detail.unsubscribe();
        drop(detail);

        let snapshot = list.load_more(listener.clone()).await.unwrap();
        assert_eq!(snapshot.cursor, 40);
        assert_eq!(listener.calls(), 2);
    }
}
