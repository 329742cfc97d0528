use crate::{
    random::{OsRandom, RandomSource},
    Error, Result,
};
use dicepass_wordlist::{WordKey, DIE_FACES, MAX_DIGITS};

/// Bytes at or above this value are redrawn.
///
/// 252 is the largest multiple of six that fits in a byte so the
/// accepted range maps onto each face the same number of times.
const REJECT_FROM: u8 = (256 - 256 % DIE_FACES as u16) as u8;

/// Roll a die using the operating system random source.
///
/// Returns a value between 1 and 6 inclusive.
pub fn roll_die() -> Result<u8> {
    roll_die_with(&OsRandom)
}

/// Roll a die using the given random source.
pub fn roll_die_with<S>(source: &S) -> Result<u8>
where
    S: RandomSource + ?Sized,
{
    let mut buffer = [0u8; 1];
    loop {
        source.try_fill(&mut buffer)?;
        let value = buffer[0];
        if value < REJECT_FROM {
            return Ok(value % DIE_FACES + 1);
        }
        tracing::trace!(value = value, "roll_die::reject");
    }
}

/// Roll `digits` dice and compose the result as a number.
///
/// Each decimal digit of the result is a die face, for five
/// dice the result is between 11111 and 66666.
pub fn roll_word(digits: usize) -> Result<u32> {
    roll_word_with(&OsRandom, digits)
}

/// Roll `digits` dice using the given random source and compose
/// the result as a number.
pub fn roll_word_with<S>(source: &S, digits: usize) -> Result<u32>
where
    S: RandomSource + ?Sized,
{
    Ok(roll_word_key_with(source, digits)?.to_number())
}

/// Roll `digits` dice and compose the result as a word key.
pub fn roll_word_key(digits: usize) -> Result<WordKey> {
    roll_word_key_with(&OsRandom, digits)
}

/// Roll `digits` dice using the given random source and compose
/// the result as a word key.
pub fn roll_word_key_with<S>(source: &S, digits: usize) -> Result<WordKey>
where
    S: RandomSource + ?Sized,
{
    if digits == 0 || digits > MAX_DIGITS {
        return Err(Error::DiceOutOfRange(digits, MAX_DIGITS));
    }
    let rolls = (0..digits)
        .map(|_| roll_die_with(source))
        .collect::<Result<Vec<_>>>()?;
    Ok(WordKey::from_rolls(&rolls)?)
}
