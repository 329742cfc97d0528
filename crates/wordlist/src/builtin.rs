//! Built-in word lists.
use crate::{Error, Result, WordList, DEFAULT_DIGITS};
use diceware_wordlists::{
    EFF_LONG_WORDLIST, EFF_SHORT_WORDLIST_1, REINHOLD_WORDLIST,
};
use enum_iterator::Sequence;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Dice rolled for each word of the EFF short list.
const EFF_SMALL_DIGITS: usize = 4;

static EFF_LARGE: Lazy<WordList> = Lazy::new(|| {
    builtin(
        WordListKind::EffLarge,
        EFF_LONG_WORDLIST.iter().map(|word| word.to_string()),
    )
});

static EFF_SMALL: Lazy<WordList> = Lazy::new(|| {
    builtin(
        WordListKind::EffSmall,
        EFF_SHORT_WORDLIST_1.iter().map(|word| word.to_string()),
    )
});

static ORIGINAL: Lazy<WordList> = Lazy::new(|| {
    builtin(
        WordListKind::Original,
        REINHOLD_WORDLIST.iter().map(|word| word.to_string()),
    )
});

fn builtin(
    kind: WordListKind,
    words: impl Iterator<Item = String>,
) -> WordList {
    WordList::from_words(kind.to_string(), kind.digits(), words)
        .expect("built-in word list is valid")
}

/// Built-in word lists.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    Sequence,
)]
#[serde(rename_all = "kebab-case")]
pub enum WordListKind {
    /// EFF large word list.
    #[default]
    #[serde(alias = "eff")]
    EffLarge,
    /// First EFF short word list.
    #[serde(alias = "eff-short")]
    EffSmall,
    /// Original diceware list by Arnold Reinhold.
    #[serde(alias = "reinhold")]
    Original,
}

impl WordListKind {
    /// Shared instance of the word list.
    pub fn word_list(&self) -> WordList {
        match self {
            Self::EffLarge => EFF_LARGE.clone(),
            Self::EffSmall => EFF_SMALL.clone(),
            Self::Original => ORIGINAL.clone(),
        }
    }

    /// Number of dice rolled for each word.
    pub fn digits(&self) -> usize {
        match self {
            Self::EffLarge | Self::Original => DEFAULT_DIGITS,
            Self::EffSmall => EFF_SMALL_DIGITS,
        }
    }
}

impl fmt::Display for WordListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", {
            match self {
                Self::EffLarge => "eff-large",
                Self::EffSmall => "eff-small",
                Self::Original => "original",
            }
        })
    }
}

impl FromStr for WordListKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "eff-large" | "eff" => Ok(Self::EffLarge),
            "eff-small" | "eff-short" => Ok(Self::EffSmall),
            "original" | "reinhold" => Ok(Self::Original),
            _ => Err(Error::UnknownKind(s.to_owned())),
        }
    }
}

impl From<WordListKind> for WordList {
    fn from(value: WordListKind) -> Self {
        value.word_list()
    }
}

impl WordList {
    /// EFF large word list; 7776 words keyed by five dice.
    pub fn eff_large() -> WordList {
        WordListKind::EffLarge.word_list()
    }

    /// First EFF short word list; 1296 words keyed by four dice.
    pub fn eff_small() -> WordList {
        WordListKind::EffSmall.word_list()
    }

    /// Original diceware list; 7776 words keyed by five dice.
    pub fn original() -> WordList {
        WordListKind::Original.word_list()
    }
}
