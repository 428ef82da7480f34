//! Word corpus for passphrases.
//!
//! The built-in list holds 3,484 common English adjectives, adverbs and
//! animal names of 3 to 10 letters, about 11.8 bits per word. A custom list can be read from any text file with
//! one word per line.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::rand::RandomSource;
use crate::{Error, Result};

static BUILTIN_WORDLIST: &str = include_str!("wordlists/common.wordlist");

static BUILTIN: LazyLock<WordList> = LazyLock::new(|| WordList::parse(BUILTIN_WORDLIST));

/// Supplies independent words for passphrase mode.
pub trait WordSource {
    /// Draw one word. Each call is independent of the previous ones.
    fn next_word<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<&str>;

    /// Number of distinct words a draw can return.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn builtin() -> &'static WordList {
        &BUILTIN
    }

    /// Keep lines that are a single run of lowercase ASCII letters; drop
    /// duplicates. Dice-roll prefixes (`11111\tword`) are skipped.
    pub fn parse(text: &str) -> Self {
        let mut words: Vec<String> = text
            .lines()
            .filter_map(|line| line.split_whitespace().last())
            .map(str::to_lowercase)
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Load a custom list. Fails with [`Error::EmptyWordList`] when no line
    /// survives [`WordList::parse`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let list = Self::parse(&text);
        if list.words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        log::debug!("loaded custom word list with {} words", list.words.len());
        Ok(list)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl WordSource for WordList {
    fn next_word<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<&str> {
        if self.words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        let idx = rng.uniform(self.words.len())?;
        Ok(&self.words[idx])
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::rand::OsEntropy;

    #[test]
    fn builtin_list_is_large_and_clean() {
        let list = WordList::builtin();
        assert_eq!(list.len(), 3484);
        assert!(
            list.words()
                .iter()
                .all(|w| (3..=10).contains(&w.len()) && w.chars().all(|c| c.is_ascii_lowercase()))
        );
        for word in ["aardvark", "blithely", "proud", "vendace"] {
            assert!(list.words().iter().any(|w| w == word), "{word}");
        }
    }

    #[test]
    fn parse_skips_noise() {
        let list = WordList::parse("11111\tabacus\n\nApple\nfoo bar\nx-ray\nabacus\n");
        assert_eq!(list.words(), ["abacus", "apple", "bar"]);
    }

    #[test]
    fn next_word_draws_from_list() {
        let list = WordList::parse("alpha\nbravo\ncharlie\n");
        let mut rng = OsEntropy;
        for _ in 0..50 {
            let w = list.next_word(&mut rng).unwrap();
            assert!(list.words().iter().any(|x| x == w));
        }
    }

    #[test]
    fn empty_list_fails() {
        let list = WordList::parse("123\n");
        assert!(list.is_empty());
        assert!(matches!(
            list.next_word(&mut OsEntropy),
            Err(Error::EmptyWordList)
        ));
    }

    #[test]
    fn from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lantern\nmeadow\nquartz").unwrap();
        let list = WordList::from_file(file.path()).unwrap();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn from_file_rejects_unusable_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1234\n!!!").unwrap();
        assert!(matches!(
            WordList::from_file(file.path()),
            Err(Error::EmptyWordList)
        ));
    }
}
