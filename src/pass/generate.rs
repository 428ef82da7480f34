//! Password and passphrase generation.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::charset::Alphabet;
use super::words::{WordList, WordSource};
use super::{GenerationConfig, Mode};
use crate::Result;
use crate::rand::{self, OsEntropy, RandomSource};

/// A freshly generated secret. Wiped from memory when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct GeneratedValue {
    value: String,
}

impl GeneratedValue {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for GeneratedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedValue")
            .field("value", &"**********")
            .finish()
    }
}

/// Generate one value with the OS random source and the built-in word list.
pub fn generate(config: &GenerationConfig) -> Result<GeneratedValue> {
    generate_with(config, &mut OsEntropy, WordList::builtin())
}

/// Generate one value with caller-supplied collaborators.
pub fn generate_with<R, W>(config: &GenerationConfig, rng: &mut R, words: &W) -> Result<GeneratedValue>
where
    R: RandomSource + ?Sized,
    W: WordSource + ?Sized,
{
    let length = config.effective_length()?;
    let value = match config.mode {
        Mode::Password => password(config, length, rng)?,
        Mode::Passphrase => passphrase(config, length, rng, words)?,
    };
    log::debug!("generated {} ({} units)", config.mode.label(), length);
    Ok(GeneratedValue { value })
}

// =============================================================================
// Password mode
// =============================================================================

fn password<R: RandomSource + ?Sized>(
    config: &GenerationConfig,
    length: usize,
    rng: &mut R,
) -> Result<String> {
    let alphabet = Alphabet::for_config(config);
    let mut chars: Vec<char> = Vec::with_capacity(length);

    // Mandatory uppercase goes in first, before the pool grows.
    chars.push(*rand::choose(rng, &alphabet.upper)?);

    for _ in 0..config.required_digits() {
        chars.push(*rand::choose(rng, &alphabet.digit)?);
    }
    for _ in 0..config.required_special() {
        chars.push(*rand::choose(rng, &alphabet.special)?);
    }
    if config.use_lowercase {
        chars.push(*rand::choose(rng, &alphabet.lower)?);
    }

    let pool = alphabet.pool(config);
    while chars.len() < length {
        chars.push(*rand::choose(rng, &pool)?);
    }

    let shuffled = rand::shuffle(rng, &mut chars);
    let value = chars.iter().collect();
    chars.zeroize();
    shuffled?;
    Ok(value)
}

// =============================================================================
// Passphrase mode
// =============================================================================

fn passphrase<R, W>(config: &GenerationConfig, count: usize, rng: &mut R, words: &W) -> Result<String>
where
    R: RandomSource + ?Sized,
    W: WordSource + ?Sized,
{
    let mut picked: Vec<String> = Vec::with_capacity(count);
    for _ in 0..count {
        let word = words.next_word(rng)?;
        picked.push(if config.capitalize {
            capitalize(word)
        } else {
            word.to_string()
        });
    }

    if config.include_number && !picked.is_empty() {
        let idx = rng.uniform(picked.len())?;
        let digit = rng.uniform(10)?;
        picked[idx].push(char::from(b'0' + digit as u8));
    }

    let value = picked.join(&config.word_separator);
    picked.zeroize();
    Ok(value)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
