//! Word-list loading and validation.
//!
//! Provides the `Wordlist` type, a validated 2048-entry dictionary, with
//! a line-oriented file loader and the canonical English list embedded at
//! compile time. A word list is loaded once and passed explicitly to the
//! generation operations; nothing in the pipeline touches the filesystem.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::MnemonicError;

/// Required number of words in a dictionary.
pub const WORDLIST_SIZE: usize = 2048;

/// The canonical BIP-39 English word list, one word per line.
const ENGLISH: &str = include_str!("english.txt");

/// An ordered, validated dictionary of exactly 2048 distinct words.
///
/// The full dictionary contract is enforced at construction: exactly
/// `WORDLIST_SIZE` entries, each non-empty and distinct after whitespace
/// trimming. Lookups by 11-bit index therefore cannot go out of range on
/// a successfully constructed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Build a dictionary from an ordered word sequence.
    ///
    /// Entries are whitespace-trimmed before validation. Order is
    /// significant and preserved.
    ///
    /// # Arguments
    /// * `words` - Exactly 2048 words in dictionary order.
    ///
    /// # Returns
    /// The validated `Wordlist`, `InvalidDictionarySize` if the count is
    /// wrong, or `CorruptDictionary` for an empty or duplicated entry.
    pub fn new(words: Vec<String>) -> Result<Self, MnemonicError> {
        if words.len() != WORDLIST_SIZE {
            return Err(MnemonicError::InvalidDictionarySize {
                expected: WORDLIST_SIZE,
                got: words.len(),
            });
        }

        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.trim().to_string())
            .collect();

        {
            let mut seen: HashSet<&str> = HashSet::with_capacity(WORDLIST_SIZE);
            for word in &words {
                if word.is_empty() {
                    return Err(MnemonicError::CorruptDictionary(
                        "empty word".to_string(),
                    ));
                }
                if !seen.insert(word.as_str()) {
                    return Err(MnemonicError::CorruptDictionary(format!(
                        "duplicate word '{}'",
                        word
                    )));
                }
            }
        }

        Ok(Wordlist { words })
    }

    /// Load a dictionary from a newline-separated reader.
    ///
    /// Lines are whitespace-trimmed; blank lines are skipped; a final
    /// line without a trailing newline is accepted as a word. The result
    /// passes through the same validation as [`Wordlist::new`].
    ///
    /// # Arguments
    /// * `reader` - Source of the word-list text.
    ///
    /// # Returns
    /// The validated `Wordlist`, or an `Io` / validation error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MnemonicError> {
        let mut words = Vec::with_capacity(WORDLIST_SIZE);
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            words.push(word.to_string());
        }
        Self::new(words)
    }

    /// Load a dictionary from a plain-text file.
    ///
    /// # Arguments
    /// * `path` - Path to a file with one word per line.
    ///
    /// # Returns
    /// The validated `Wordlist`, or an `Io` / validation error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MnemonicError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// The canonical English word list.
    ///
    /// Parsed from the embedded copy; the list is compile-time data that
    /// always satisfies the dictionary contract.
    pub fn english() -> Wordlist {
        let words = ENGLISH.lines().map(str::to_string).collect();
        Wordlist::new(words).expect("embedded English word list is valid")
    }

    /// Look up the word at an index.
    ///
    /// # Arguments
    /// * `index` - Word index in [0, 2048).
    ///
    /// # Returns
    /// The word, or `None` if the index is past the end of the list.
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }

    /// Number of words in the dictionary (always 2048).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty (never, for a constructed list).
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
