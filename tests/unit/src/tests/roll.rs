use anyhow::Result;
use dicepass::{
    random::RngSource, roll_die, roll_die_with, roll_word, roll_word_key,
    DEFAULT_DIGITS,
};
use rand::{rngs::StdRng, SeedableRng};

const N: usize = 10_000;

#[test]
fn roll_die_range() -> Result<()> {
    for _ in 0..N {
        let value = roll_die()?;
        assert!((1..=6).contains(&value), "out of range ({value})");
    }
    Ok(())
}

#[test]
fn roll_die_uniform() -> Result<()> {
    let source = RngSource::new(StdRng::seed_from_u64(0x5eed));
    let rolls = 60_000;
    let mut counts = [0usize; 6];
    for _ in 0..rolls {
        counts[(roll_die_with(&source)? - 1) as usize] += 1;
    }

    // Expected 10000 per face with a standard deviation near 91
    let expected = rolls / 6;
    for (face, count) in counts.iter().enumerate() {
        assert!(
            count.abs_diff(expected) < 600,
            "face {} rolled {} times",
            face + 1,
            count
        );
    }
    Ok(())
}

#[test]
fn roll_word_range() -> Result<()> {
    for _ in 0..N {
        let value = roll_word(DEFAULT_DIGITS)?;
        assert!((11111..=66666).contains(&value), "out of range ({value})");
        let digits = value.to_string();
        assert!(digits.chars().all(|c| ('1'..='6').contains(&c)));
    }
    Ok(())
}

#[test]
fn roll_word_key_agrees() -> Result<()> {
    for _ in 0..1_000 {
        let key = roll_word_key(DEFAULT_DIGITS)?;
        assert_eq!(key.as_str(), key.to_number().to_string());
        assert_eq!(DEFAULT_DIGITS, key.digits());
    }
    Ok(())
}

#[test]
fn roll_word_invalid_digits() {
    let err = roll_word(0).unwrap_err();
    assert!(err.is_invalid_argument());
    let err = roll_word(10).unwrap_err();
    assert!(err.is_invalid_argument());
}
