//! Command-line mode.

mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::{Context, Done};
pub use flags::{CliFlags, CommandMode};
pub use parse::parse;

use passforge::settings::PreferenceStore;

/// Run one CLI invocation. Exits the process with status 2 on bad arguments.
/// `Done` marks an early exit whose output is already written.
pub fn run(args: Vec<String>, store: &dyn PreferenceStore) {
    let mut ctx = match Context::new(args, store) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    match ctx.run() {
        Ok(()) | Err(Done) => {}
    }
}
