//! Sources of random bytes used to roll dice.
//!
//! The default source is the operating system CSPRNG. Other sources
//! can be injected into a [Generator](crate::Generator), typically a
//! seeded RNG or a [ScriptedSource] so tests can assert on exact output.
use crate::{Error, Result};
use dicepass_wordlist::{Error as WordListError, DIE_FACES};
use parking_lot::Mutex;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use std::{collections::VecDeque, fmt};

/// Source of random bytes.
///
/// Implementations must be safe to share between threads.
pub trait RandomSource: fmt::Debug + Send + Sync {
    /// Fill the buffer with random bytes.
    ///
    /// Fails if the source cannot supply bytes.
    fn try_fill(&self, dest: &mut [u8]) -> std::result::Result<(), rand::Error>;
}

/// Operating system cryptographically secure random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn try_fill(&self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        let rng = &mut OsRng;
        rng.try_fill_bytes(dest)
    }
}

/// Random source backed by a cryptographically secure RNG.
///
/// Access to the RNG is serialized so the source can be shared.
pub struct RngSource<R>(Mutex<R>);

impl<R: RngCore + CryptoRng + Send> RngSource<R> {
    /// Create a random source from an RNG.
    pub fn new(rng: R) -> Self {
        Self(Mutex::new(rng))
    }
}

impl<R> fmt::Debug for RngSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RngSource").finish_non_exhaustive()
    }
}

impl<R: RngCore + CryptoRng + Send> RandomSource for RngSource<R> {
    fn try_fill(&self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.0.lock().try_fill_bytes(dest)
    }
}

#[derive(Debug, Default)]
struct Script {
    remaining: VecDeque<u8>,
    consumed: usize,
}

/// Random source that replays a fixed script of bytes.
///
/// Once the script is exhausted every request fails.
#[derive(Debug, Default)]
pub struct ScriptedSource(Mutex<Script>);

impl ScriptedSource {
    /// Create a source that yields the given bytes in order.
    pub fn new(bytes: impl IntoIterator<Item = u8>) -> Self {
        Self(Mutex::new(Script {
            remaining: bytes.into_iter().collect(),
            consumed: 0,
        }))
    }

    /// Create a source that yields the given die faces in order.
    ///
    /// Each face is encoded as the single byte a die roll
    /// maps to that face.
    pub fn from_rolls(rolls: &[u8]) -> Result<Self> {
        let bytes = rolls
            .iter()
            .map(|roll| {
                if (1..=DIE_FACES).contains(roll) {
                    Ok(roll - 1)
                } else {
                    Err(Error::from(WordListError::InvalidFace(*roll)))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(bytes))
    }

    /// Number of bytes supplied so far.
    pub fn consumed(&self) -> usize {
        self.0.lock().consumed
    }

    /// Number of bytes left in the script.
    pub fn remaining(&self) -> usize {
        self.0.lock().remaining.len()
    }
}

impl RandomSource for ScriptedSource {
    fn try_fill(&self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        let mut script = self.0.lock();
        if script.remaining.len() < dest.len() {
            return Err(rand::Error::new("random script exhausted"));
        }
        for byte in dest.iter_mut() {
            // Length checked above
            *byte = script.remaining.pop_front().unwrap_or_default();
        }
        script.consumed += dest.len();
        Ok(())
    }
}
