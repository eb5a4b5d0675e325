//! Dictionary service
//!
//! Holds the word list the solver draws candidates from, pre-partitioned by
//! word length. The dictionary is loaded once before a solve and treated as
//! read-only shared data; the solver references words by id and never copies
//! their text between branches.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Index of a word within a [`Dictionary`]
pub type WordId = u32;

/// An ordered, length-indexed word list
///
/// Order is preserved exactly as supplied: candidate lists derived from the
/// dictionary keep this order, and the search tries candidates in it.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    by_len: FxHashMap<usize, Vec<WordId>>,
}

impl Dictionary {
    /// Build a dictionary from an ordered word list
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut by_len: FxHashMap<usize, Vec<WordId>> = FxHashMap::default();
        for (id, word) in words.iter().enumerate() {
            by_len.entry(word.len()).or_default().push(id as WordId);
        }
        Self { words, by_len }
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by id
    ///
    /// # Panics
    /// Panics if the id did not come from this dictionary.
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id as usize]
    }

    /// Ids of all words with exactly `len` letters, in dictionary order
    ///
    /// The length partition is a pure lookup optimization: seeding a slot from
    /// `of_len(slot.len())` gives the same result as filtering the whole list.
    #[must_use]
    pub fn of_len(&self, len: usize) -> &[WordId] {
        self.by_len.get(&len).map_or(&[], Vec::as_slice)
    }
}
