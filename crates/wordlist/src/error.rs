use crate::WordKey;
use thiserror::Error;

/// Errors generated building word lists and parsing word keys.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a word key contains a character
    /// that is not a die face.
    #[error("invalid word key '{0}', digits must be between 1 and 6")]
    InvalidKey(String),

    /// Error generated when a die face is out of range.
    #[error("die face {0} is out of range, expected 1 to 6")]
    InvalidFace(u8),

    /// Error generated when a key width is zero or too large.
    #[error("word key width must be between 1 and {1} digits, got {0}")]
    KeyWidth(usize, usize),

    /// Error generated when an index does not fit in the key space.
    #[error("index {index} does not fit in a key of {digits} digits")]
    IndexOutOfRange {
        /// Zero-based index.
        index: usize,
        /// Key width.
        digits: usize,
    },

    /// Error generated when a key does not match the width of the list.
    #[error("word key '{key}' does not have the expected {expected} digits")]
    MixedKeyWidth {
        /// Offending key.
        key: WordKey,
        /// Key width of the list.
        expected: usize,
    },

    /// Error generated when a key appears more than once.
    #[error("duplicate word key '{0}'")]
    DuplicateKey(WordKey),

    /// Error generated when a word is assigned to more than one key.
    #[error("word '{word}' is assigned to both '{first}' and '{second}'")]
    DuplicateWord {
        /// Repeated word.
        word: String,
        /// First key for the word.
        first: WordKey,
        /// Second key for the word.
        second: WordKey,
    },

    /// Error generated when a key maps to an empty word.
    #[error("word key '{0}' has an empty word")]
    EmptyWord(WordKey),

    /// Error generated when there are more words than keys.
    #[error("{len} words do not fit in a key space of {digits} digits")]
    TooManyWords {
        /// Number of words supplied.
        len: usize,
        /// Key width.
        digits: usize,
    },

    /// Error generated when a line in a word list file
    /// cannot be parsed.
    #[error("malformed word list entry on line {line}: '{content}'")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// Line content.
        content: String,
    },

    /// Error generated when a word list name is not recognized.
    #[error("unknown word list '{0}'")]
    UnknownKind(String),
}
