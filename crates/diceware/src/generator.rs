//! Passphrase generation.
use crate::{
    random::{OsRandom, RandomSource},
    roll::roll_word_key_with,
    Error, Result,
};
use dicepass_wordlist::WordList;
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use secrecy::SecretString;
use std::sync::Arc;

static DEFAULT_GENERATOR: Lazy<Generator> = Lazy::new(Generator::default);

/// Generate a passphrase of `count` distinct words using the
/// EFF large word list and the operating system random source.
pub fn generate(count: usize) -> Result<Vec<String>> {
    DEFAULT_GENERATOR.generate(count)
}

/// Generate a passphrase of `count` distinct words.
///
/// # Panics
///
/// Panics if the passphrase cannot be generated.
pub fn must_generate(count: usize) -> Vec<String> {
    match generate(count) {
        Ok(words) => words,
        Err(e) => panic!("failed to generate passphrase: {e}"),
    }
}

/// Generate a passphrase of `count` distinct words from a word list.
pub fn generate_with_word_list(
    count: usize,
    word_list: &WordList,
) -> Result<Vec<String>> {
    let options = GeneratorOptions::default().with_word_list(word_list.clone());
    Generator::new(Some(options))?.generate(count)
}

/// Options for creating a generator.
///
/// Unset options use the EFF large word list and the
/// operating system random source.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Word list to select words from.
    pub word_list: Option<WordList>,
    /// Source of random bytes for rolling dice.
    pub random_source: Option<Arc<dyn RandomSource>>,
}

impl GeneratorOptions {
    /// Use a word list.
    pub fn with_word_list(mut self, word_list: impl Into<WordList>) -> Self {
        self.word_list = Some(word_list.into());
        self
    }

    /// Use a random source.
    pub fn with_random_source(
        mut self,
        random_source: Arc<dyn RandomSource>,
    ) -> Self {
        self.random_source = Some(random_source);
        self
    }
}

/// Passphrase generator.
///
/// A generator holds no state between calls so it can be
/// shared and used from many threads at once.
#[derive(Debug, Clone)]
pub struct Generator {
    word_list: WordList,
    random_source: Arc<dyn RandomSource>,
}

impl Generator {
    /// Create a generator.
    ///
    /// Fails if the word list is empty.
    pub fn new(options: Option<GeneratorOptions>) -> Result<Self> {
        let options = options.unwrap_or_default();
        let word_list = options.word_list.unwrap_or_else(WordList::eff_large);
        if word_list.is_empty() {
            return Err(Error::EmptyWordList(word_list.name().to_owned()));
        }
        let random_source = options
            .random_source
            .unwrap_or_else(|| Arc::new(OsRandom));
        Ok(Self {
            word_list,
            random_source,
        })
    }

    /// Word list used by this generator.
    pub fn word_list(&self) -> &WordList {
        &self.word_list
    }

    /// Generate `count` distinct words.
    ///
    /// Words are returned in the order they were rolled. When a
    /// rolled word has already been chosen the word is rolled again.
    ///
    /// The count is validated before any dice are rolled; it must
    /// be at least one and no more than the number of entries in
    /// the word list. A rolled key that is missing from the word
    /// list is an error.
    pub fn generate(&self, count: usize) -> Result<Vec<String>> {
        if count == 0 {
            return Err(Error::ZeroCount);
        }
        let available = self.word_list.len();
        if count > available {
            return Err(Error::TooManyWords(count, available));
        }

        let digits = self.word_list.digits();
        let mut selected: IndexSet<&str> = IndexSet::with_capacity(count);
        let mut retries = 0usize;
        while selected.len() < count {
            let key = roll_word_key_with(self.random_source.as_ref(), digits)?;
            let Some(word) = self.word_list.get(&key) else {
                tracing::warn!(
                    key = %key,
                    list = %self.word_list.name(),
                    "generate::missing_word"
                );
                return Err(Error::MissingWord {
                    key,
                    list: self.word_list.name().to_owned(),
                });
            };
            if !selected.insert(word) {
                retries += 1;
                tracing::trace!(key = %key, "generate::duplicate");
            }
        }

        tracing::debug!(
            list = %self.word_list.name(),
            count = count,
            retries = retries,
            "generate"
        );
        Ok(selected.into_iter().map(ToOwned::to_owned).collect())
    }

    /// Generate `count` distinct words joined by a separator.
    pub fn passphrase(
        &self,
        count: usize,
        separator: &str,
    ) -> Result<SecretString> {
        let words = self.generate(count)?;
        Ok(SecretString::from(words.join(separator)))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            word_list: WordList::eff_large(),
            random_source: Arc::new(OsRandom),
        }
    }
}
