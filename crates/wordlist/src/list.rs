use crate::{
    key::{capacity, check_width},
    Error, Result, WordKey, DEFAULT_DIGITS,
};
use indexmap::IndexMap;
use std::{collections::HashMap, fmt, sync::Arc};

struct Inner {
    name: String,
    digits: usize,
    entries: IndexMap<WordKey, String>,
    reverse: HashMap<String, WordKey>,
}

/// Immutable mapping from word keys to words.
///
/// Every key in a list has the same number of digits. A list is
/// complete when it holds a word for every possible key and partial
/// otherwise. No two keys map to the same word.
///
/// Cloning is cheap; clones share the same entries.
#[derive(Clone)]
pub struct WordList(Arc<Inner>);

impl WordList {
    /// Create a word list from key and word pairs.
    ///
    /// Entries are ordered by key.
    pub fn new(
        name: impl Into<String>,
        digits: usize,
        entries: impl IntoIterator<Item = (WordKey, String)>,
    ) -> Result<Self> {
        check_width(digits)?;

        let mut map = IndexMap::new();
        let mut reverse = HashMap::new();
        for (key, word) in entries {
            if key.digits() != digits {
                return Err(Error::MixedKeyWidth {
                    key,
                    expected: digits,
                });
            }
            if word.is_empty() {
                return Err(Error::EmptyWord(key));
            }
            if map.contains_key(&key) {
                return Err(Error::DuplicateKey(key));
            }
            if let Some(first) = reverse.insert(word.clone(), key.clone()) {
                return Err(Error::DuplicateWord {
                    word,
                    first,
                    second: key,
                });
            }
            map.insert(key, word);
        }
        map.sort_keys();

        Ok(Self(Arc::new(Inner {
            name: name.into(),
            digits,
            entries: map,
            reverse,
        })))
    }

    /// Create a word list from words in key order.
    ///
    /// The first word is assigned the lowest key (`11111` for
    /// five digits), the next word the following key and so on.
    pub fn from_words<I, S>(
        name: impl Into<String>,
        digits: usize,
        words: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        check_width(digits)?;
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() > capacity(digits) {
            return Err(Error::TooManyWords {
                len: words.len(),
                digits,
            });
        }
        let entries = words
            .into_iter()
            .enumerate()
            .map(|(index, word)| Ok((WordKey::from_index(index, digits)?, word)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(name, digits, entries)
    }

    /// Parse a word list in the diceware text format.
    ///
    /// Each entry is a key followed by whitespace and the word,
    /// for example `11111 abacus`. Blank lines and lines starting
    /// with `#` are ignored. The key width is taken from the
    /// first entry.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let malformed = || Error::Malformed {
                line: number + 1,
                content: line.to_owned(),
            };
            let mut parts = line.split_whitespace();
            let (Some(key), Some(word), None) =
                (parts.next(), parts.next(), parts.next())
            else {
                return Err(malformed());
            };
            let key: WordKey = key.parse().map_err(|_| malformed())?;
            entries.push((key, word.to_owned()));
        }

        let digits = entries
            .first()
            .map(|(key, _)| key.digits())
            .unwrap_or(DEFAULT_DIGITS);
        Self::new(name, digits, entries)
    }

    /// Name of this list.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Number of dice rolled to compose a key.
    pub fn digits(&self) -> usize {
        self.0.digits
    }

    /// Number of entries in this list.
    pub fn len(&self) -> usize {
        self.0.entries.len()
    }

    /// Determine if this list has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.entries.is_empty()
    }

    /// Determine if every possible key has a word.
    pub fn is_complete(&self) -> bool {
        self.len() == capacity(self.digits())
    }

    /// Word for a key.
    pub fn get(&self, key: &WordKey) -> Option<&str> {
        self.lookup(key.as_str())
    }

    /// Word for the string encoding of a key.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.0.entries.get(key).map(String::as_str)
    }

    /// Key assigned to a word.
    pub fn key_of(&self, word: &str) -> Option<&WordKey> {
        self.0.reverse.get(word)
    }

    /// Determine if a word is in this list.
    pub fn contains_word(&self, word: &str) -> bool {
        self.0.reverse.contains_key(word)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&WordKey, &str)> {
        self.0
            .entries
            .iter()
            .map(|(key, word)| (key, word.as_str()))
    }

    /// Determine if two lists share the same entries.
    pub fn ptr_eq(&self, other: &WordList) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordList")
            .field("name", &self.name())
            .field("digits", &self.digits())
            .field("len", &self.len())
            .finish()
    }
}
