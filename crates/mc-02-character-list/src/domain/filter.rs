//! # Local Search
//!
//! Narrows a list to characters whose name contains a term, ignoring case.
//! Leading and trailing whitespace of the term is ignored; a blank term
//! selects everything.

use shared_types::Character;

/// Normalize a raw search term. `None` means "no filter".
pub fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Order-preserving subsequence of `source` whose names contain `term`.
pub fn filter_characters(term: &str, source: &[Character]) -> Vec<Character> {
    match normalize_term(term) {
        None => source.to_vec(),
        Some(needle) => source
            .iter()
            .filter(|character| character.name.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    }
}
