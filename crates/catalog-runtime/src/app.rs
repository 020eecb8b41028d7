//! # Catalog App
//!
//! Drives one browsing session the way the two screens would:
//!
//! 1. Initial page load
//! 2. `pages` incremental loads (a failed page ends pagination, it is not fatal)
//! 3. Optional local search
//! 4. Optional handoff of one displayed character to a detail controller,
//!    through the JSON navigation payload

use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::Mutex;
use tracing::{info, warn};

use mc_01_request_signing::RequestSigner;
use mc_02_character_list::CharacterListController;
use mc_03_character_detail::CharacterDetailController;
use shared_types::{
    character_to_image_url, to_navigation_payload, Character, CharacterApi, CharacterResponse,
    ImageVariant,
};

use crate::config::CatalogConfig;
use crate::console::{LoggingObserver, ProgressTracker};

/// What one session should do.
#[derive(Debug, Clone, Default)]
pub struct BrowsePlan {
    /// Extra pages to load after the first one.
    pub pages: u32,
    pub search: Option<String>,
    /// Index into the displayed list to open in the detail controller.
    pub detail_index: Option<usize>,
}

/// A displayed row, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRow {
    pub id: u64,
    pub name: String,
    pub image_url: String,
}

impl From<&Character> for CharacterRow {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            image_url: character_to_image_url(character, ImageVariant::LandscapeIncredible),
        }
    }
}

/// Opened detail screen.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub character: Character,
    pub image_url: String,
    /// `None` when the detail request failed.
    pub response: Option<CharacterResponse>,
}

/// Outcome of a session.
#[derive(Debug, Clone)]
pub struct BrowseReport {
    pub rows: Vec<CharacterRow>,
    pub loaded: usize,
    pub cursor: u32,
    pub pages_loaded: u32,
    pub detail: Option<DetailView>,
}

pub struct CatalogApp {
    api: Arc<dyn CharacterApi>,
    signer: RequestSigner,
    list: CharacterListController,
    detail: Mutex<Option<Arc<CharacterDetailController>>>,
    progress: Arc<ProgressTracker>,
    observer: Arc<LoggingObserver>,
}

impl CatalogApp {
    pub fn new(config: &CatalogConfig, api: Arc<dyn CharacterApi>, signer: RequestSigner) -> Self {
        let observer = Arc::new(LoggingObserver::default());
        let list = CharacterListController::new(
            api.clone(),
            signer.clone(),
            observer.clone(),
            config.paging.list.clone(),
        );

        Self {
            api,
            signer,
            list,
            detail: Mutex::new(None),
            progress: Arc::new(ProgressTracker::default()),
            observer,
        }
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn observer(&self) -> &LoggingObserver {
        &self.observer
    }

    pub fn list(&self) -> &CharacterListController {
        &self.list
    }

    /// Run one browsing session.
    pub async fn browse(&self, plan: &BrowsePlan) -> Result<BrowseReport> {
        self.progress.begin();
        self.list
            .load_initial(self.progress.clone())
            .await
            .context("Initial character load failed")?;

        let mut pages_loaded = 0;
        for _ in 0..plan.pages {
            self.progress.begin();
            match self.list.load_more(self.progress.clone()).await {
                Ok(_) => pages_loaded += 1,
                Err(err) => {
                    warn!(error = %err, cursor = self.list.cursor(), "Stopping pagination");
                    break;
                }
            }
        }

        if let Some(term) = &plan.search {
            let matches = self.list.filter(term);
            info!(term = %term, matches = matches.len(), "Search applied");
        }

        let displayed = self.list.displayed();
        let detail = match plan.detail_index {
            Some(index) => match displayed.get(index) {
                Some(character) => Some(self.open_detail(character).await?),
                None => {
                    warn!(index, rows = displayed.len(), "Detail index out of range");
                    None
                }
            },
            None => None,
        };

        Ok(BrowseReport {
            rows: displayed.iter().map(CharacterRow::from).collect(),
            loaded: self.list.original().len(),
            cursor: self.list.cursor(),
            pages_loaded,
            detail,
        })
    }

    /// Cancel everything in flight on both screens.
    pub fn unsubscribe(&self) {
        self.list.unsubscribe();
        if let Some(detail) = self.detail.lock().as_ref() {
            detail.unsubscribe();
        }
        self.progress.reset();
    }

    async fn open_detail(&self, character: &Character) -> Result<DetailView> {
        let payload = to_navigation_payload(character).context("Failed to encode navigation payload")?;
        let detail = Arc::new(
            CharacterDetailController::from_payload(
                Some(&payload),
                self.api.clone(),
                self.signer.clone(),
            )
            .context("Failed to open detail screen")?,
        );
        *self.detail.lock() = Some(detail.clone());

        self.progress.begin();
        let response = match detail.load_detail(self.progress.clone()).await {
            Ok(response) => Some(response),
            Err(err) => {
                warn!(id = character.id, error = %err, "Showing detail without extended data");
                None
            }
        };

        Ok(DetailView {
            character: detail.character().clone(),
            image_url: detail.detail_image_url(),
            response,
        })
    }
}
