use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt, str::FromStr};

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

/// Number of dice rolled for each word of the full size lists.
pub const DEFAULT_DIGITS: usize = 5;

/// Maximum number of dice in a key.
///
/// The numeric form of a key must fit in a `u32`.
pub const MAX_DIGITS: usize = 9;

/// Number of distinct keys that can be composed from `digits` dice.
pub fn capacity(digits: usize) -> usize {
    (DIE_FACES as usize).pow(digits as u32)
}

pub(crate) fn check_width(digits: usize) -> Result<()> {
    if digits == 0 || digits > MAX_DIGITS {
        return Err(Error::KeyWidth(digits, MAX_DIGITS));
    }
    Ok(())
}

/// Key into a word list composed from die rolls.
///
/// The string encoding is the die faces concatenated most significant
/// first, for example `"11111"` or `"65432"`. The same digits read as a
/// decimal number give the numeric form returned by [WordKey::to_number].
#[derive(
    Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct WordKey(String);

impl WordKey {
    /// Compose a key from die faces.
    pub fn from_rolls(rolls: &[u8]) -> Result<Self> {
        check_width(rolls.len())?;
        let mut key = String::with_capacity(rolls.len());
        for roll in rolls {
            if !(1..=DIE_FACES).contains(roll) {
                return Err(Error::InvalidFace(*roll));
            }
            key.push(char::from(b'0' + roll));
        }
        Ok(Self(key))
    }

    /// Key at a zero-based position in a complete list
    /// keyed by `digits` dice.
    pub fn from_index(index: usize, digits: usize) -> Result<Self> {
        check_width(digits)?;
        if index >= capacity(digits) {
            return Err(Error::IndexOutOfRange { index, digits });
        }
        let faces = DIE_FACES as usize;
        let mut rolls = vec![0u8; digits];
        let mut remainder = index;
        for roll in rolls.iter_mut().rev() {
            *roll = (remainder % faces) as u8 + 1;
            remainder /= faces;
        }
        Self::from_rolls(&rolls)
    }

    /// Zero-based position of this key in a complete list.
    pub fn index(&self) -> usize {
        self.rolls().fold(0, |acc, roll| {
            acc * DIE_FACES as usize + (roll - 1) as usize
        })
    }

    /// Die faces in this key, most significant first.
    pub fn rolls(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// Number of dice in this key.
    pub fn digits(&self) -> usize {
        self.0.len()
    }

    /// Digits of this key as a decimal number.
    pub fn to_number(&self) -> u32 {
        self.rolls().fold(0, |acc, roll| acc * 10 + roll as u32)
    }

    /// Key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for WordKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for WordKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for WordKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        check_width(s.len())?;
        let rolls = s
            .bytes()
            .map(|b| match b {
                b'1'..=b'6' => Ok(b - b'0'),
                _ => Err(Error::InvalidKey(s.to_owned())),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rolls(&rolls)
    }
}

impl TryFrom<String> for WordKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        <WordKey as FromStr>::from_str(&value)
    }
}

impl TryFrom<u32> for WordKey {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        <WordKey as FromStr>::from_str(&value.to_string())
    }
}

impl From<WordKey> for String {
    fn from(value: WordKey) -> String {
        value.0
    }
}

impl From<WordKey> for u32 {
    fn from(value: WordKey) -> u32 {
        value.to_number()
    }
}
