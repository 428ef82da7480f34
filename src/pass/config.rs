//! Generation settings and their normalisation.

use std::ops::RangeInclusive;

use crate::error::ConfigError;

/// Accepted password lengths at the user-facing surfaces.
pub const PASSWORD_LENGTH_RANGE: RangeInclusive<i64> = 10..=128;
/// Accepted passphrase word counts at the user-facing surfaces.
pub const PASSPHRASE_WORDS_RANGE: RangeInclusive<i64> = 3..=20;
/// Bounds applied to `minimum_digits` and `minimum_special`.
pub const MINIMUM_RANGE: RangeInclusive<u32> = 1..=9;

/// Below these the front end suggests a longer value.
pub const RECOMMENDED_PASSWORD_LENGTH: i64 = 14;
pub const RECOMMENDED_PASSPHRASE_WORDS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Password,
    Passphrase,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Password => "password",
            Mode::Passphrase => "passphrase",
        }
    }
}

/// One request for a value. Uppercase is mandatory and has no toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub mode: Mode,
    /// Characters in Password mode, words in Passphrase mode.
    pub length: i64,
    pub use_lowercase: bool,
    pub use_digits: bool,
    pub use_special: bool,
    pub avoid_ambiguous: bool,
    pub minimum_digits: u32,
    pub minimum_special: u32,
    pub word_separator: String,
    pub capitalize: bool,
    pub include_number: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Password,
            length: 15,
            use_lowercase: true,
            use_digits: true,
            use_special: true,
            avoid_ambiguous: false,
            minimum_digits: 1,
            minimum_special: 1,
            word_separator: String::from("-"),
            capitalize: false,
            include_number: false,
        }
    }
}

impl GenerationConfig {
    pub fn password(length: i64) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    pub fn passphrase(words: i64, separator: &str) -> Self {
        Self {
            mode: Mode::Passphrase,
            length: words,
            word_separator: separator.to_string(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn uses_uppercase(&self) -> bool {
        true
    }

    /// `minimum_digits` clamped, or 0 when digits are off.
    pub fn required_digits(&self) -> usize {
        if self.use_digits {
            clamp_minimum(self.minimum_digits)
        } else {
            0
        }
    }

    /// `minimum_special` clamped, or 0 when specials are off.
    pub fn required_special(&self) -> usize {
        if self.use_special {
            clamp_minimum(self.minimum_special)
        } else {
            0
        }
    }

    /// Characters every password must reserve for mandatory classes.
    pub fn mandatory_floor(&self) -> usize {
        1 + usize::from(self.use_lowercase) + self.required_digits() + self.required_special()
    }

    /// Check the settings and return the number of characters (or words) to
    /// emit. A password length below the floor is raised to it; one above
    /// the password maximum is rejected. Word counts must lie within
    /// [`PASSPHRASE_WORDS_RANGE`].
    pub fn effective_length(&self) -> Result<usize, ConfigError> {
        if self.length < 0 {
            return Err(ConfigError::NegativeLength(self.length));
        }
        let (min, max) = match self.mode {
            Mode::Password => (0, *PASSWORD_LENGTH_RANGE.end()),
            Mode::Passphrase => (*PASSPHRASE_WORDS_RANGE.start(), *PASSPHRASE_WORDS_RANGE.end()),
        };
        if !(min..=max).contains(&self.length) {
            return Err(ConfigError::LengthOutOfRange {
                length: self.length,
                min,
                max,
            });
        }
        let requested = usize::try_from(self.length)
            .map_err(|_| ConfigError::NonFiniteLength(self.length.to_string()))?;

        match self.mode {
            Mode::Password => {
                let floor = self.mandatory_floor();
                if requested < floor {
                    log::debug!("raising password length {requested} to mandatory floor {floor}");
                }
                Ok(requested.max(floor))
            }
            Mode::Passphrase => {
                validate_separator(&self.word_separator)?;
                Ok(requested)
            }
        }
    }

    /// Clamp `length` into the user-facing range for the current mode.
    /// Returns the original value when it had to move.
    pub fn clamp_to_bounds(&mut self) -> Option<i64> {
        let range = self.bounds();
        let clamped = self.length.clamp(*range.start(), *range.end());
        if clamped == self.length {
            return None;
        }
        let original = self.length;
        self.length = clamped;
        Some(original)
    }

    pub fn bounds(&self) -> RangeInclusive<i64> {
        match self.mode {
            Mode::Password => PASSWORD_LENGTH_RANGE,
            Mode::Passphrase => PASSPHRASE_WORDS_RANGE,
        }
    }

    /// Hint shown next to the length setting.
    pub fn length_clarification(&self) -> &'static str {
        match self.mode {
            Mode::Password => {
                "Value must be between 10 and 128. Use 14 characters or more to generate a strong password."
            }
            Mode::Passphrase => {
                "Value must be between 3 and 20. Use 6 words or more to generate a strong passphrase."
            }
        }
    }

    pub fn is_below_recommended(&self) -> bool {
        match self.mode {
            Mode::Password => self.length < RECOMMENDED_PASSWORD_LENGTH,
            Mode::Passphrase => self.length < RECOMMENDED_PASSPHRASE_WORDS,
        }
    }
}

#[inline]
fn clamp_minimum(n: u32) -> usize {
    n.clamp(*MINIMUM_RANGE.start(), *MINIMUM_RANGE.end()) as usize
}

/// Separators must split back cleanly into the words they join.
pub fn validate_separator(sep: &str) -> Result<(), ConfigError> {
    let bad = sep.is_empty()
        || sep
            .chars()
            .any(|c| c.is_alphanumeric() || c.is_control());
    if bad {
        return Err(ConfigError::InvalidSeparator(sep.to_string()));
    }
    Ok(())
}

/// Parse a length typed by a user or read from the settings file.
pub fn parse_length(s: &str) -> Result<i64, ConfigError> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        if n < 0 {
            return Err(ConfigError::NegativeLength(n));
        }
        return Ok(n);
    }
    match s.parse::<f64>() {
        Ok(f) if !f.is_finite() => Err(ConfigError::NonFiniteLength(s.to_string())),
        Ok(f) if f < 0.0 => Err(ConfigError::NegativeLength(f as i64)),
        _ => Err(ConfigError::NonFiniteLength(s.to_string())),
    }
}
