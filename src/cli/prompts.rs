//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Suppresses warnings, info lines and interactive prompts.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Skip prompts when quiet or when stdin is not a tty.
fn skip_prompt() -> bool {
    quiet() || unsafe { libc::isatty(0) != 1 }
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: impl std::fmt::Display) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print a dim status line to stderr - suppressed in quiet mode
pub fn info(msg: &str) {
    if !quiet() {
        eprintln!("{DIM}{msg}{RESET}");
    }
}

pub fn length_clamped(requested: i64, used: i64, hint: &str) {
    warn(&format!("Length {requested} is out of range, using {used}. {hint}"));
}

pub fn minimum_clamped(what: &str, requested: u32, used: u32) {
    warn(&format!("Minimum {what} {requested} is out of range, using {used}."));
}

pub fn below_recommended(hint: &str) {
    warn(&format!("Warning: short value. {hint}"));
}

pub fn entropy(bits: f64, strength: &str, source: &str) {
    info(&format!("Entropy: {bits:.1} bits ({strength}) \u{2022} Source: {source}"));
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Print output summary - suppressed in quiet mode
pub fn values_written(count: usize, path: &str) {
    if !quiet() {
        println!("{count} value(s) \u{2192} {path}");
    }
}
