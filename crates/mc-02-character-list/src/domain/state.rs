//! # Character List State
//!
//! Holds the last server-confirmed ("original") list separately from the
//! displayed list, so clearing a search restores the full list without a
//! new request.
//!
//! Every mutation here corresponds to an acknowledged server response or a
//! local search; failures never reach this type.

use std::ops::Range;

use shared_types::{Character, CharacterResponse};

use super::config::ListConfig;
use super::filter::{filter_characters, normalize_term};
use super::pagination::PaginationCursor;

/// Point-in-time copy of the list state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListSnapshot {
    pub original: Vec<Character>,
    pub displayed: Vec<Character>,
    pub cursor: u32,
    /// Active search term (trimmed), if any.
    pub filter_term: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CharacterListState {
    original: Vec<Character>,
    displayed: Vec<Character>,
    cursor: PaginationCursor,
    filter_term: Option<String>,
}

impl CharacterListState {
    pub fn new(config: &ListConfig) -> Self {
        Self {
            original: Vec::new(),
            displayed: Vec::new(),
            cursor: PaginationCursor::new(config.page_size),
            filter_term: None,
        }
    }

    pub fn original(&self) -> &[Character] {
        &self.original
    }

    pub fn displayed(&self) -> &[Character] {
        &self.displayed
    }

    pub fn cursor(&self) -> u32 {
        self.cursor.position()
    }

    pub fn filter_term(&self) -> Option<&str> {
        self.filter_term.as_deref()
    }

    /// Page size for the initial request.
    pub fn initial_limit(&self) -> u32 {
        self.cursor.page_size()
    }

    /// Page size for the next `load_more` request.
    pub fn next_limit(&self) -> u32 {
        self.cursor.next_limit()
    }

    /// Apply a successful initial load.
    pub fn apply_initial(&mut self, response: &CharacterResponse) {
        self.original = response.data.results.clone();
        self.cursor.reset_to(response.data.limit);
        self.refresh_displayed();
    }

    /// Apply a successful page load and return the index range that is new.
    pub fn apply_page(&mut self, response: &CharacterResponse) -> Range<usize> {
        self.original = response.data.results.clone();
        self.refresh_displayed();
        self.cursor.advance()
    }

    /// Set (or clear, with a blank term) the search term.
    ///
    /// Always filters from the original list, never from the previous result.
    pub fn apply_filter(&mut self, term: &str) {
        self.filter_term = normalize_term(term).map(|_| term.trim().to_string());
        self.refresh_displayed();
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            original: self.original.clone(),
            displayed: self.displayed.clone(),
            cursor: self.cursor.position(),
            filter_term: self.filter_term.clone(),
        }
    }

    fn refresh_displayed(&mut self) {
        self.displayed = match &self.filter_term {
            Some(term) => filter_characters(term, &self.original),
            None => self.original.clone(),
        };
    }
}
