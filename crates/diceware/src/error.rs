use dicepass_wordlist::WordKey;
use thiserror::Error;

/// Errors generated rolling dice and generating passphrases.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the random source cannot supply bytes.
    #[error("random source failed: {0}")]
    RandomSource(#[from] rand::Error),

    /// Error generated when a rolled key has no entry in the word list.
    #[error("word list '{list}' has no entry for key '{key}'")]
    MissingWord {
        /// Rolled key.
        key: WordKey,
        /// Name of the word list.
        list: String,
    },

    /// Error generated when a generator is given an empty word list.
    #[error("word list '{0}' is empty")]
    EmptyWordList(String),

    /// Error generated when zero words are requested.
    #[error("number of words must be greater than zero")]
    ZeroCount,

    /// Error generated when more distinct words are requested
    /// than the word list contains.
    #[error("requested {0} distinct words but the word list only has {1}")]
    TooManyWords(usize, usize),

    /// Error generated when the number of dice for a word
    /// is out of range.
    #[error("number of dice must be between 1 and {1}, got {0}")]
    DiceOutOfRange(usize, usize),

    /// Errors generated by the word list library.
    #[error(transparent)]
    WordList(#[from] dicepass_wordlist::Error),
}

impl Error {
    /// Determine if this error was caused by the random source.
    pub fn is_random_source(&self) -> bool {
        matches!(self, Self::RandomSource(_))
    }

    /// Determine if this error indicates a malformed or
    /// incomplete word list.
    pub fn is_invalid_word_list(&self) -> bool {
        matches!(
            self,
            Self::MissingWord { .. } | Self::EmptyWordList(_) | Self::WordList(_)
        )
    }

    /// Determine if this error was caused by an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::ZeroCount | Self::TooManyWords(_, _) | Self::DiceOutOfRange(_, _)
        )
    }
}
