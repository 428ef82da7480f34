//! Remembered generator preferences.
//!
//! The generator never touches these; the CLI and TUI load them through a
//! [`PreferenceStore`] and turn them into a [`GenerationConfig`].

mod file;

use std::path::PathBuf;

pub use file::FileStore;

use crate::Result;
use crate::pass::{GenerationConfig, Mode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub password_length: i64,
    pub number_of_words: i64,
    pub include_lower: bool,
    pub include_numbers: bool,
    pub include_special: bool,
    pub avoid_ambiguous: bool,
    pub minimum_numbers: u32,
    pub minimum_specials: u32,
    pub word_separator: String,
    pub capitalize: bool,
    pub include_number: bool,
    pub number_of_values: usize,
    pub cli_command: String,
}

impl Settings {
    /// Length for the active mode: characters or words.
    pub fn length(&self) -> i64 {
        match self.mode {
            Mode::Password => self.password_length,
            Mode::Passphrase => self.number_of_words,
        }
    }

    pub fn set_length(&mut self, length: i64) {
        match self.mode {
            Mode::Password => self.password_length = length,
            Mode::Passphrase => self.number_of_words = length,
        }
    }

    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            mode: self.mode,
            length: self.length(),
            use_lowercase: self.include_lower,
            use_digits: self.include_numbers,
            use_special: self.include_special,
            avoid_ambiguous: self.avoid_ambiguous,
            minimum_digits: self.minimum_numbers,
            minimum_special: self.minimum_specials,
            word_separator: self.word_separator.clone(),
            capitalize: self.capitalize,
            include_number: self.include_number,
        }
    }

    /// Copy a (possibly normalised) config back into the stored fields.
    pub fn apply(&mut self, config: &GenerationConfig) {
        self.mode = config.mode;
        self.set_length(config.length);
        self.include_lower = config.use_lowercase;
        self.include_numbers = config.use_digits;
        self.include_special = config.use_special;
        self.avoid_ambiguous = config.avoid_ambiguous;
        self.minimum_numbers = config.minimum_digits;
        self.minimum_specials = config.minimum_special;
        self.word_separator = config.word_separator.clone();
        self.capitalize = config.capitalize;
        self.include_number = config.include_number;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Password,
            password_length: 15,
            number_of_words: 6,
            include_lower: true,
            include_numbers: true,
            include_special: true,
            avoid_ambiguous: false,
            minimum_numbers: 1,
            minimum_specials: 1,
            word_separator: String::from("-"),
            capitalize: false,
            include_number: false,
            number_of_values: 1,
            cli_command: String::new(),
        }
    }
}

/// Where preferences live between runs.
pub trait PreferenceStore {
    /// Load saved preferences, creating the backing store with defaults
    /// when it does not exist yet.
    fn load(&self) -> Result<Settings>;

    fn save(&self, settings: &Settings) -> Result<()>;

    /// Load, falling back to defaults on any error.
    fn load_or_default(&self) -> Settings {
        self.load().unwrap_or_else(|e| {
            log::warn!("failed to load settings: {e}");
            Settings::default()
        })
    }

    fn has_saved_command(&self) -> bool {
        self.load()
            .map(|s| !s.cli_command.is_empty())
            .unwrap_or(false)
    }
}

/// Settings path: `$PASSFORGE_SETTINGS`, else `$HOME/.config/passforge/settings`.
pub fn default_path() -> PathBuf {
    if let Some(path) = std::env::var_os("PASSFORGE_SETTINGS") {
        return PathBuf::from(path);
    }
    let home = std::env::var_os("HOME").unwrap_or_else(|| ".".into());
    PathBuf::from(home).join(".config/passforge/settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_follows_mode() {
        let mut s = Settings::default();
        assert_eq!(s.length(), 15);
        s.mode = Mode::Passphrase;
        assert_eq!(s.length(), 6);
        s.set_length(8);
        assert_eq!(s.number_of_words, 8);
        assert_eq!(s.password_length, 15);
    }

    #[test]
    fn config_round_trip() {
        let mut s = Settings::default();
        s.mode = Mode::Passphrase;
        s.capitalize = true;
        s.word_separator = String::from(" / ");

        let mut cfg = s.generation_config();
        assert_eq!(cfg.length, 6);
        assert_eq!(cfg.word_separator, " / ");
        cfg.length = 9;

        s.apply(&cfg);
        assert_eq!(s.number_of_words, 9);
        assert_eq!(s.password_length, 15);
        assert_eq!(s.generation_config(), cfg);
    }

    #[test]
    fn defaults_match_generator_defaults() {
        assert_eq!(
            Settings::default().generation_config(),
            GenerationConfig::default()
        );
    }
}
