//! Constrained password and passphrase generation.
//!
//! The engine lives in [`pass`]: a [`GenerationConfig`] goes in, a
//! [`GeneratedValue`] comes out. Randomness is drawn through the
//! [`rand::RandomSource`] capability, which defaults to the operating system
//! CSPRNG. Remembered user choices are kept by a [`settings::PreferenceStore`]
//! owned by the caller, never by the generator.

pub mod error;
pub mod pass;
pub mod rand;
pub mod settings;

pub use error::{ConfigError, Error, Result};
pub use pass::{GeneratedValue, GenerationConfig, Mode, generate, generate_with};
