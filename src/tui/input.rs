use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Single-line editor in raw mode. Only characters passing `accept` are
/// inserted. Returns `None` on Esc or Ctrl+Q.
fn edit_line(prompt: &str, initial: &str, accept: impl Fn(char) -> bool) -> Option<String> {
    let mut input: Vec<char> = initial.chars().collect();
    let mut cursor = input.len();
    let mut drawn = input.len();

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial.to_string()),
    };

    print!("{}: {}", prompt, initial);
    flush();

    let cancelled = loop {
        let key = match read() {
            Ok(Event::Key(key)) => key,
            Ok(_) => continue,
            Err(_) => break false,
        };

        match key {
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers,
                ..
            } if modifiers.contains(KeyModifiers::CONTROL) => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers,
                ..
            } if modifiers.contains(KeyModifiers::CONTROL) => break true,
            KeyEvent {
                code: KeyCode::Char('u'),
                modifiers,
                ..
            } if modifiers.contains(KeyModifiers::CONTROL) => {
                input.clear();
                cursor = 0;
            }
            KeyEvent { code, .. } => match code {
                KeyCode::Esc => break true,
                KeyCode::Enter => break false,
                KeyCode::Backspace if cursor > 0 => {
                    cursor -= 1;
                    input.remove(cursor);
                }
                KeyCode::Delete if cursor < input.len() => {
                    input.remove(cursor);
                }
                KeyCode::Left if cursor > 0 => cursor -= 1,
                KeyCode::Right if cursor < input.len() => cursor += 1,
                KeyCode::Home => cursor = 0,
                KeyCode::End => cursor = input.len(),
                KeyCode::Char(c) if accept(c) => {
                    input.insert(cursor, c);
                    cursor += 1;
                }
                _ => {}
            },
        }

        let text: String = input.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(drawn + 1));
        print!("\r{}: {}", prompt, text);
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        drawn = input.len();
    };

    drop(guard);
    println!();

    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}

pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit_line(prompt, initial_value, |_| true)
}

/// Digits only. An empty entry keeps `current`.
pub fn get_numeric_input(prompt: &str, current: i64) -> Option<i64> {
    let text = edit_line(prompt, "", |c| c.is_ascii_digit())?;
    if text.is_empty() {
        return Some(current);
    }
    // Only digits get in, so the sole failure is overflow.
    Some(text.parse().unwrap_or(i64::MAX))
}
