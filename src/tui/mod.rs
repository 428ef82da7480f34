//! Interactive generator screen.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

use passforge::settings::PreferenceStore;

/// Run TUI interactive mode.
pub fn run(store: &dyn PreferenceStore) {
    generator_screen(store);
}
