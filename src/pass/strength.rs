//! Entropy estimate for a configuration.

use super::words::WordSource;
use super::{GenerationConfig, Mode, charset};

/// Estimated entropy of one generated value in bits.
///
/// Passwords are estimated as `length * log2(pool)`, which slightly
/// overstates values whose mandatory characters come from smaller classes.
/// Passphrases count `log2(list)` per word plus the included number.
pub fn estimate<W: WordSource + ?Sized>(config: &GenerationConfig, words: &W) -> f64 {
    let Ok(length) = config.effective_length() else {
        return 0.0;
    };
    match config.mode {
        Mode::Password => calculate_entropy(length, charset::size(config)),
        Mode::Passphrase => {
            let mut bits = calculate_entropy(length, words.len());
            if config.include_number && length > 0 {
                bits += (10.0 * length as f64).log2();
            }
            bits
        }
    }
}

/// Calculate entropy in bits for `units` independent draws from `set_size`.
pub fn calculate_entropy(units: usize, set_size: usize) -> f64 {
    if set_size == 0 {
        return 0.0;
    }
    units as f64 * (set_size as f64).log2()
}

/// Get entropy strength description.
pub fn label(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
