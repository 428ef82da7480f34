//! Password generation and output.

pub mod charset;
pub mod config;
mod generate;
pub mod output;
pub mod strength;
pub mod words;

pub use config::{GenerationConfig, Mode};
pub use generate::{GeneratedValue, generate, generate_with};
pub use output::SecureBufWriter;
pub use words::{WordList, WordSource};
