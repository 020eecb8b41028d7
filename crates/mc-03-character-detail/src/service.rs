//! Character Detail Controller

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use mc_01_request_signing::RequestSigner;
use shared_types::{
    character_to_image_url, from_navigation_payload, CancellationGroup, CatalogError, Character,
    CharacterApi, CharacterResponse, ImageVariant, ProgressListener, RequestHandle,
};

/// Owns one detail screen's character and its requests.
pub struct CharacterDetailController {
    api: Arc<dyn CharacterApi>,
    signer: RequestSigner,
    character: Character,
    subscriptions: Arc<CancellationGroup>,
}

impl std::fmt::Debug for CharacterDetailController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterDetailController")
            .field("character", &self.character)
            .finish_non_exhaustive()
    }
}

impl CharacterDetailController {
    /// Build the controller from a navigation payload.
    pub fn from_payload(
        payload: Option<&str>,
        api: Arc<dyn CharacterApi>,
        signer: RequestSigner,
    ) -> Result<Self, CatalogError> {
        let character = from_navigation_payload(payload).map_err(|err| {
            warn!(error = %err, "Rejected detail navigation payload");
            err
        })?;
        debug!(id = character.id, name = %character.name, "Detail controller created");
        Ok(Self::new(character, api, signer))
    }

    /// Build the controller around an already decoded character.
    pub fn new(character: Character, api: Arc<dyn CharacterApi>, signer: RequestSigner) -> Self {
        Self {
            api,
            signer,
            character,
            subscriptions: Arc::new(CancellationGroup::new()),
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Square image URL shown on the detail screen.
    pub fn detail_image_url(&self) -> String {
        character_to_image_url(&self.character, ImageVariant::StandardFantastic)
    }

    /// Fetch extended detail for the held character.
    ///
    /// The listener fires once on success or failure, never after
    /// `unsubscribe()`.
    pub fn load_detail(
        &self,
        listener: Arc<dyn ProgressListener>,
    ) -> RequestHandle<CharacterResponse> {
        let signed = self.signer.sign_now();
        let id = self.character.id;
        let api = self.api.clone();
        let subscriptions = self.subscriptions.clone();
        debug!(id, "Requesting character detail");

        self.subscriptions.spawn(move |token| async move {
            let result = api
                .get_character_detail(id, &signed.timestamp, &signed.public_key, &signed.hash)
                .await;

            subscriptions
                .deliver(&token, move || {
                    match &result {
                        Ok(response) => {
                            info!(id, results = response.results().len(), "Character detail loaded");
                            listener.end_call_progress(Ok(response));
                        }
                        Err(err) => {
                            error!(id, error = %err, "Character detail request failed");
                            listener.end_call_progress(Err(err));
                        }
                    }
                    result
                })
                .and_then(|outcome| outcome)
        })
    }

    /// Cancel every in-flight request. Idempotent.
    pub fn unsubscribe(&self) {
        self.subscriptions.cancel_all();
    }

    pub fn pending_requests(&self) -> usize {
        self.subscriptions.pending()
    }
}

impl Drop for CharacterDetailController {
    fn drop(&mut self) {
        self.subscriptions.cancel_all();
    }
}
