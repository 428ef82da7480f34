use std::env;

mod cli;
mod exits;
mod terminal;
mod tui;

use passforge::settings::{FileStore, PreferenceStore};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("PASSFORGE_LOG", "off"))
        .format_timestamp(None)
        .init();

    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let store = FileStore::at_default_path();
    log::debug!("settings at {}", store.path().display());

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 if !store.has_saved_command() => tui::run(&store),
        _ => cli::run(args, &store),
    }
}
