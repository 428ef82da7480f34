use std::collections::HashSet;

use passforge::pass::charset::{AMBIGUOUS, Alphabet};
use passforge::pass::{WordList, WordSource};
use passforge::rand::{CryptoRngSource, OsEntropy, RandomSource};
use passforge::{ConfigError, Error, GenerationConfig, Mode, generate, generate_with};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SPECIAL: &str = "!@#$%^&*";

fn configs() -> Vec<GenerationConfig> {
    let mut out = Vec::new();
    for lower in [false, true] {
        for digits in [false, true] {
            for special in [false, true] {
                for avoid in [false, true] {
                    for (length, min) in [(10, 1), (14, 3), (40, 9), (4, 2)] {
                        out.push(GenerationConfig {
                            length,
                            use_lowercase: lower,
                            use_digits: digits,
                            use_special: special,
                            avoid_ambiguous: avoid,
                            minimum_digits: min,
                            minimum_special: min,
                            ..Default::default()
                        });
                    }
                }
            }
        }
    }
    out
}

#[test]
fn length_matches_effective_length() {
    for cfg in configs() {
        let expected = cfg.effective_length().unwrap();
        for _ in 0..20 {
            assert_eq!(generate(&cfg).unwrap().len(), expected, "{cfg:?}");
        }
    }
}

#[test]
fn every_enabled_class_meets_its_minimum() {
    for cfg in configs() {
        for _ in 0..20 {
            let v = generate(&cfg).unwrap();
            let s = v.as_str();
            let count = |f: fn(&char) -> bool| s.chars().filter(f).count();

            assert!(count(char::is_ascii_uppercase) >= 1);
            if cfg.use_lowercase {
                assert!(count(char::is_ascii_lowercase) >= 1);
            }
            if cfg.use_digits {
                assert!(count(char::is_ascii_digit) >= cfg.minimum_digits as usize);
            }
            if cfg.use_special {
                let specials = s.chars().filter(|c| SPECIAL.contains(*c)).count();
                assert!(specials >= cfg.minimum_special as usize);
            }
        }
    }
}

#[test]
fn only_enabled_alphabets_appear() {
    for cfg in configs() {
        let alphabet = Alphabet::for_config(&cfg);
        let allowed: HashSet<char> = alphabet.pool(&cfg).into_iter().collect();
        for _ in 0..20 {
            let v = generate(&cfg).unwrap();
            assert!(v.as_str().chars().all(|c| allowed.contains(&c)), "{v:?} {cfg:?}");
            if !cfg.use_lowercase {
                assert!(!v.as_str().chars().any(|c| c.is_ascii_lowercase()));
            }
            if !cfg.use_digits {
                assert!(!v.as_str().chars().any(|c| c.is_ascii_digit()));
            }
            if !cfg.use_special {
                assert!(!v.as_str().chars().any(|c| SPECIAL.contains(c)));
            }
        }
    }
}

#[test]
fn ambiguous_glyphs_never_appear_when_avoided() {
    let cfg = GenerationConfig {
        length: 128,
        avoid_ambiguous: true,
        ..Default::default()
    };
    for _ in 0..500 {
        let v = generate(&cfg).unwrap();
        assert!(!v.as_str().contains(AMBIGUOUS));
    }
}

#[test]
fn short_length_is_raised_to_floor() {
    let cfg = GenerationConfig {
        length: 5,
        use_lowercase: true,
        use_digits: true,
        minimum_digits: 5,
        use_special: false,
        ..Default::default()
    };
    assert_eq!(cfg.mandatory_floor(), 7);
    assert_eq!(cfg.effective_length().unwrap(), 7);
    assert_eq!(generate(&cfg).unwrap().len(), 7);

    let cfg = GenerationConfig {
        length: 0,
        minimum_digits: 9,
        minimum_special: 9,
        ..Default::default()
    };
    assert_eq!(generate(&cfg).unwrap().len(), 20);
}

#[test]
fn repeated_calls_differ() {
    let cfg = GenerationConfig::password(10);
    let distinct = (0..1000)
        .filter(|_| generate(&cfg).unwrap() != generate(&cfg).unwrap())
        .count();
    assert!(distinct >= 999, "{distinct}");
}

#[test]
fn filler_is_uniform_over_the_pool() {
    // Uppercase only with ambiguous glyphs removed: 24 equally likely symbols.
    let cfg = GenerationConfig {
        length: 128,
        use_lowercase: false,
        use_digits: false,
        use_special: false,
        avoid_ambiguous: true,
        ..Default::default()
    };
    let symbols = Alphabet::for_config(&cfg).upper;
    assert_eq!(symbols.len(), 24);

    let mut counts = [0u64; 26];
    let mut total = 0u64;
    for _ in 0..2000 {
        for c in generate(&cfg).unwrap().as_str().chars() {
            counts[(c as u8 - b'A') as usize] += 1;
            total += 1;
        }
    }

    let expected = total as f64 / symbols.len() as f64;
    let chi2: f64 = symbols
        .iter()
        .map(|c| {
            let observed = counts[(*c as u8 - b'A') as usize] as f64;
            (observed - expected).powi(2) / expected
        })
        .sum();
    // 23 degrees of freedom; 0.999 quantile is about 49.7.
    assert!(chi2 < 80.0, "chi-square {chi2}");
}

#[test]
fn classes_share_filler_by_pool_size() {
    // Pool is 24 uppercase + 8 digits; one digit is mandatory and 98
    // filler draws land on a digit with probability 1/4.
    let cfg = GenerationConfig {
        length: 100,
        use_lowercase: false,
        use_special: false,
        avoid_ambiguous: true,
        ..Default::default()
    };
    let runs = 1000;
    let digits: usize = (0..runs)
        .map(|_| {
            generate(&cfg)
                .unwrap()
                .as_str()
                .chars()
                .filter(char::is_ascii_digit)
                .count()
        })
        .sum();
    let mean = digits as f64 / runs as f64;
    assert!((mean - 25.5).abs() < 1.0, "mean digits {mean}");
}

#[test]
fn seeded_sources_reproduce_values() {
    let cfg = GenerationConfig::password(24);
    let words = WordList::builtin();
    let mut a = CryptoRngSource::new(StdRng::seed_from_u64(7));
    let mut b = CryptoRngSource::new(StdRng::seed_from_u64(7));
    for _ in 0..10 {
        assert_eq!(
            generate_with(&cfg, &mut a, words).unwrap(),
            generate_with(&cfg, &mut b, words).unwrap()
        );
    }
}

#[test]
fn passphrase_has_requested_words() {
    let cfg = GenerationConfig::passphrase(6, "-");
    let words: HashSet<&str> = WordList::builtin().words().iter().map(String::as_str).collect();
    for _ in 0..100 {
        let v = generate(&cfg).unwrap();
        assert_eq!(v.as_str().matches('-').count(), 5);
        let tokens: Vec<&str> = v.as_str().split('-').collect();
        assert_eq!(tokens.len(), 6);
        assert!(tokens.iter().all(|t| words.contains(t)));
    }
}

#[test]
fn passphrase_decorations() {
    let cfg = GenerationConfig {
        capitalize: true,
        include_number: true,
        ..GenerationConfig::passphrase(5, " ")
    };
    for _ in 0..100 {
        let v = generate(&cfg).unwrap();
        let tokens: Vec<&str> = v.as_str().split(' ').collect();
        assert_eq!(tokens.len(), 5);
        assert!(
            tokens
                .iter()
                .all(|t| t.starts_with(|c: char| c.is_ascii_uppercase()))
        );
        let numbered = tokens
            .iter()
            .filter(|t| t.ends_with(|c: char| c.is_ascii_digit()))
            .count();
        assert_eq!(numbered, 1);
    }
}

/// Hands out words in order, ignoring the random source.
struct Sequence(Vec<&'static str>, std::cell::Cell<usize>);

impl WordSource for Sequence {
    fn next_word<R: RandomSource + ?Sized>(&self, _rng: &mut R) -> passforge::Result<&str> {
        if self.0.is_empty() {
            return Err(Error::EmptyWordList);
        }
        let i = self.1.get();
        self.1.set(i + 1);
        Ok(self.0[i % self.0.len()])
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[test]
fn custom_word_source() {
    let words = Sequence(vec!["red", "fox", "den"], Default::default());
    let cfg = GenerationConfig::passphrase(4, "_");
    let v = generate_with(&cfg, &mut OsEntropy, &words).unwrap();
    assert_eq!(v.as_str(), "red_fox_den_red");
}

#[test]
fn invalid_configs_are_rejected() {
    let negative = GenerationConfig::password(-3);
    assert!(matches!(
        generate(&negative),
        Err(Error::Config(ConfigError::NegativeLength(-3)))
    ));

    for sep in ["", "a", "1", "\n"] {
        let cfg = GenerationConfig::passphrase(4, sep);
        assert!(matches!(
            generate(&cfg),
            Err(Error::Config(ConfigError::InvalidSeparator(_)))
        ));
    }

    let empty = Sequence(Vec::new(), Default::default());
    let cfg = GenerationConfig::passphrase(3, "-");
    assert!(generate_with(&cfg, &mut OsEntropy, &empty).is_err());
}

#[test]
fn uppercase_only_is_valid() {
    let cfg = GenerationConfig {
        length: 12,
        use_lowercase: false,
        use_digits: false,
        use_special: false,
        ..Default::default()
    };
    let v = generate(&cfg).unwrap();
    assert!(v.as_str().chars().all(|c| c.is_ascii_uppercase()));
    assert_eq!(cfg.mode, Mode::Password);
}

#[test]
fn oversized_lengths_are_errors_not_panics() {
    for cfg in [
        GenerationConfig::password(i64::MAX),
        GenerationConfig::password(129),
        GenerationConfig::passphrase(21, "-"),
        GenerationConfig::passphrase(0, "-"),
    ] {
        let outcome = std::panic::catch_unwind(|| generate(&cfg));
        assert!(matches!(
            outcome,
            Ok(Err(Error::Config(ConfigError::LengthOutOfRange { .. })))
        ));
    }
}
