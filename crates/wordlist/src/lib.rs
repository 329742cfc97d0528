#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Diceware word lists.
//!
//! A word list maps a key composed from die rolls (each digit `1` to `6`)
//! to a word. Lists are immutable once built and cheap to clone so many
//! generators can share the same list.
//!
//! Three built-in lists are available:
//!
//! * [WordList::eff_large] - the EFF large list, 7776 words keyed by five dice.
//! * [WordList::eff_small] - the first EFF short list, 1296 words keyed by four dice.
//! * [WordList::original] - the original Reinhold list, 7776 words keyed by five dice.
mod builtin;
mod error;
mod key;
mod list;

pub use builtin::WordListKind;
pub use error::Error;
pub use key::{capacity, WordKey, DEFAULT_DIGITS, DIE_FACES, MAX_DIGITS};
pub use list::WordList;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
