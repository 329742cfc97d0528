#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Generate diceware passphrases.
//!
//! Words are chosen by simulating rolls of a fair die using a
//! cryptographically secure random source and mapping each sequence
//! of rolls to an entry in a [WordList]. Every passphrase contains
//! exactly the requested number of distinct words.
//!
//! ```no_run
//! # fn main() -> dicepass::Result<()> {
//! let words = dicepass::generate(6)?;
//! assert_eq!(6, words.len());
//! # Ok(())
//! # }
//! ```
//!
//! Use a [Generator] to select a different word list or random source:
//!
//! ```no_run
//! use dicepass::{Generator, GeneratorOptions, WordList};
//! # fn main() -> dicepass::Result<()> {
//! let generator = Generator::new(Some(
//!     GeneratorOptions::default().with_word_list(WordList::original()),
//! ))?;
//! let words = generator.generate(6)?;
//! # Ok(())
//! # }
//! ```
mod error;
mod generator;
pub mod random;
mod roll;

pub use error::Error;
pub use generator::{
    generate, generate_with_word_list, must_generate, Generator,
    GeneratorOptions,
};
pub use roll::{
    roll_die, roll_die_with, roll_word, roll_word_key, roll_word_key_with,
    roll_word_with,
};

pub use dicepass_wordlist::{
    WordKey, WordList, WordListKind, DEFAULT_DIGITS, DIE_FACES, MAX_DIGITS,
};
pub use secrecy;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
