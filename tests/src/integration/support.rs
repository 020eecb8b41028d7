//! Fixtures shared by the integration flows.

use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use mc_02_character_list::ListObserver;
use shared_types::{CatalogError, Character, CharacterResponse, ProgressListener, Thumbnail};

pub const PUBLIC_KEY: &str = "catalog-public";
pub const PRIVATE_KEY: &str = "catalog-private";
pub const FIXED_MILLIS: i64 = 1_700_000_000_000;

/// `size` characters with ids 1000.., a few of them recognisable by name.
pub fn roster(size: usize) -> Vec<Character> {
    (0..size)
        .map(|i| {
            let name = match i {
                3 => "Spider-Man".to_string(),
                4 => "Iron Man".to_string(),
                25 => "Spider-Woman".to_string(),
                _ => format!("Character {i:03}"),
            };
            Character::new(
                1000 + i as u64,
                name,
                Thumbnail {
                    path: format!("http://i.annihil.us/u/prod/marvel/i/mg/{i}"),
                    extension: "jpg".to_string(),
                },
            )
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    DataSetChanged(usize),
    ItemRangeChanged(Range<usize>),
}

#[derive(Default)]
pub struct RecordingObserver {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingObserver {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl ListObserver for RecordingObserver {
    fn data_set_changed(&self, items: &[Character]) {
        self.notices.lock().push(Notice::DataSetChanged(items.len()));
    }

    fn item_range_changed(&self, range: Range<usize>, _items: &[Character]) {
        self.notices.lock().push(Notice::ItemRangeChanged(range));
    }
}

#[derive(Default)]
pub struct RecordingListener {
    calls: AtomicUsize,
    errors: Mutex<Vec<CatalogError>>,
}

impl RecordingListener {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn errors(&self) -> Vec<CatalogError> {
        self.errors.lock().clone()
    }
}

impl ProgressListener for RecordingListener {
    fn end_call_progress(&self, outcome: Result<&CharacterResponse, &CatalogError>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Err(err) = outcome {
            self.errors.lock().push(err.clone());
        }
    }
}
