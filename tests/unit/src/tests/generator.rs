use anyhow::Result;
use dicepass::{
    generate, generate_with_word_list, must_generate,
    random::{RngSource, ScriptedSource},
    secrecy::ExposeSecret,
    Error, Generator, GeneratorOptions, WordList, WordListKind,
};
use rand::{rngs::StdRng, SeedableRng};
use std::{collections::HashSet, sync::Arc};

const N: usize = 10_000;

fn assert_unique(words: &[String]) {
    let seen: HashSet<&String> = words.iter().collect();
    assert_eq!(words.len(), seen.len(), "found duplicate: {:?}", words);
}

#[test]
fn generator_generate() -> Result<()> {
    let generator = Generator::new(None)?;
    for _ in 0..N {
        let words = generator.generate(16)?;
        assert_eq!(16, words.len());
        assert_unique(&words);
    }
    Ok(())
}

#[test]
fn generate_word_lists() -> Result<()> {
    for kind in enum_iterator::all::<WordListKind>() {
        let word_list = kind.word_list();
        for _ in 0..N {
            let words = generate_with_word_list(16, &word_list)?;
            assert_eq!(16, words.len());
            assert_unique(&words);
            assert!(words.iter().all(|word| word_list.contains_word(word)));
        }
    }
    Ok(())
}

#[test]
fn generate_six_words() -> Result<()> {
    let word_list = WordList::eff_large();
    for _ in 0..N {
        let words = generate(6)?;
        assert_eq!(6, words.len());
        assert_unique(&words);
        assert!(words.iter().all(|word| word_list.contains_word(word)));
    }
    Ok(())
}

#[test]
fn generate_scripted_golden() -> Result<()> {
    let word_list = WordList::eff_large();
    let source = Arc::new(ScriptedSource::from_rolls(&[
        1, 1, 1, 1, 1, // first word
        1, 1, 1, 1, 1, // duplicate, rolled again
        6, 6, 6, 6, 6, // second word
        3, 4, 2, 5, 1, // third word
    ])?);
    let generator = Generator::new(Some(
        GeneratorOptions::default()
            .with_word_list(word_list.clone())
            .with_random_source(source.clone()),
    ))?;

    let words = generator.generate(3)?;
    let expected: Vec<&str> = ["11111", "66666", "34251"]
        .iter()
        .map(|key| word_list.lookup(key).unwrap())
        .collect();
    assert_eq!(expected, words);
    assert_eq!(0, source.remaining());
    Ok(())
}

#[test]
fn generate_eff_small_uses_four_dice() -> Result<()> {
    let word_list = WordList::eff_small();
    let source = Arc::new(ScriptedSource::from_rolls(&[2, 2, 2, 2, 5, 5, 5, 5])?);
    let generator = Generator::new(Some(
        GeneratorOptions::default()
            .with_word_list(word_list.clone())
            .with_random_source(source),
    ))?;
    let words = generator.generate(2)?;
    assert_eq!(word_list.lookup("2222").unwrap(), words[0]);
    assert_eq!(word_list.lookup("5555").unwrap(), words[1]);
    Ok(())
}

#[test]
fn generate_too_many_words_rolls_nothing() -> Result<()> {
    let source = Arc::new(ScriptedSource::new(vec![0u8; 64]));
    let generator = Generator::new(Some(
        GeneratorOptions::default()
            .with_word_list(WordListKind::EffSmall)
            .with_random_source(source.clone()),
    ))?;

    let err = generator.generate(1297).unwrap_err();
    assert!(matches!(err, Error::TooManyWords(1297, 1296)));
    assert!(err.is_invalid_argument());
    assert_eq!(0, source.consumed());
    Ok(())
}

#[test]
fn generate_entire_word_list() -> Result<()> {
    let generator = Generator::new(Some(
        GeneratorOptions::default()
            .with_word_list(WordListKind::EffSmall)
            .with_random_source(Arc::new(RngSource::new(
                StdRng::seed_from_u64(96),
            ))),
    ))?;
    let words = generator.generate(1296)?;
    assert_eq!(1296, words.len());
    assert_unique(&words);
    Ok(())
}

#[test]
fn generate_passphrase_joined() -> Result<()> {
    let generator = Generator::new(None)?;
    let passphrase = generator.passphrase(6, " ")?;
    let words: Vec<&str> = passphrase.expose_secret().split(' ').collect();
    assert_eq!(6, words.len());
    Ok(())
}

#[test]
#[should_panic(expected = "failed to generate passphrase")]
fn must_generate_panics() {
    must_generate(0);
}

#[test]
fn must_generate_words() {
    let words = must_generate(6);
    assert_eq!(6, words.len());
    assert_unique(&words);
}
