//! Character set building for password generation.

use super::GenerationConfig;

const UPPERCASE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghjklmnpqrstuvwxyz";
const DIGITS: &str = "23456789";
const SPECIAL: &str = "!@#$%^&*";

const AMBIGUOUS_UPPER: &str = "IO";
const AMBIGUOUS_LOWER: &str = "io";
const AMBIGUOUS_DIGITS: &str = "01";

/// Glyphs dropped when ambiguous characters are avoided.
pub const AMBIGUOUS: &[char] = &['I', 'O', '0', '1', 'i', 'o'];

/// The four disjoint class alphabets for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    pub upper: Vec<char>,
    pub lower: Vec<char>,
    pub digit: Vec<char>,
    pub special: Vec<char>,
}

impl Alphabet {
    pub fn new(avoid_ambiguous: bool) -> Self {
        let with = |base: &str, extra: &str| -> Vec<char> {
            let mut chars: Vec<char> = base.chars().collect();
            if !avoid_ambiguous {
                chars.extend(extra.chars());
            }
            chars
        };

        Self {
            upper: with(UPPERCASE, AMBIGUOUS_UPPER),
            lower: with(LOWERCASE, AMBIGUOUS_LOWER),
            digit: with(DIGITS, AMBIGUOUS_DIGITS),
            special: SPECIAL.chars().collect(),
        }
    }

    pub fn for_config(config: &GenerationConfig) -> Self {
        Self::new(config.avoid_ambiguous)
    }

    /// Union of the enabled alphabets, in the order classes are visited.
    pub fn pool(&self, config: &GenerationConfig) -> Vec<char> {
        let mut chars = self.upper.clone();
        if config.use_digits {
            chars.extend(&self.digit);
        }
        if config.use_special {
            chars.extend(&self.special);
        }
        if config.use_lowercase {
            chars.extend(&self.lower);
        }
        chars
    }
}

/// Calculate the filler pool size (for entropy calculation).
pub fn size(config: &GenerationConfig) -> usize {
    let alphabet = Alphabet::for_config(config);
    let mut size = alphabet.upper.len();
    if config.use_digits {
        size += alphabet.digit.len();
    }
    if config.use_special {
        size += alphabet.special.len();
    }
    if config.use_lowercase {
        size += alphabet.lower.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        let plain = Alphabet::new(false);
        assert_eq!(plain.upper.len(), 26);
        assert_eq!(plain.lower.len(), 26);
        assert_eq!(plain.digit.len(), 10);
        assert_eq!(plain.special.len(), 8);

        let avoid = Alphabet::new(true);
        assert_eq!(avoid.upper.len(), 24);
        assert_eq!(avoid.lower.len(), 24);
        assert_eq!(avoid.digit.len(), 8);
        assert_eq!(avoid.special.len(), 8);
    }

    #[test]
    fn avoided_alphabet_has_no_ambiguous_glyphs() {
        let a = Alphabet::new(true);
        for set in [&a.upper, &a.lower, &a.digit, &a.special] {
            assert!(set.iter().all(|c| !AMBIGUOUS.contains(c)));
        }
    }

    #[test]
    fn classes_are_disjoint() {
        let a = Alphabet::new(false);
        let sets = [&a.upper, &a.lower, &a.digit, &a.special];
        for (i, x) in sets.iter().enumerate() {
            for y in sets.iter().skip(i + 1) {
                assert!(x.iter().all(|c| !y.contains(c)));
            }
        }
    }

    #[test]
    fn pool_follows_toggles() {
        let cfg = GenerationConfig {
            use_lowercase: false,
            use_digits: true,
            use_special: false,
            avoid_ambiguous: true,
            ..Default::default()
        };
        let pool = Alphabet::for_config(&cfg).pool(&cfg);
        assert_eq!(pool.len(), 32);
        assert_eq!(size(&cfg), 32);
        assert!(pool.iter().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn full_pool_size() {
        assert_eq!(size(&GenerationConfig::default()), 26 + 10 + 8 + 26);
    }
}
