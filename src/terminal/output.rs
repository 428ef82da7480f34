//! Terminal output: boxes, rules and styled lines.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Clear screen and scrollback, cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active styling.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_warning(msg: &str) {
    println!("{YELLOW}{msg}{RESET}");
}

/// ├────────┤
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// ┌─ Title ──────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content      │
pub fn box_line(content: &str) {
    let padding = INNER_WIDTH.saturating_sub(display_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

pub fn box_line_center(content: &str) {
    let total = INNER_WIDTH.saturating_sub(display_width(content));
    let left = total / 2;
    println!("│ {}{}{} │", " ".repeat(left), content, " ".repeat(total - left));
}

/// └──────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Help line: flag column plus a description wrapped to the box.
pub fn box_opt(flag: &str, desc: &str) {
    const FLAG_COL: usize = 27;
    let desc_col = INNER_WIDTH - FLAG_COL;

    let flag_padded = format!("{:<width$}", flag, width = FLAG_COL);
    let lines = wrap(desc, desc_col);

    let mut first = true;
    for line in lines.iter().map(String::as_str).chain(lines.is_empty().then_some("")) {
        let lead = if first { flag_padded.as_str() } else { "" };
        let lead_pad = FLAG_COL.saturating_sub(lead.chars().count());
        let pad = desc_col.saturating_sub(line.chars().count());
        println!("│ {}{}{}{} │", lead, " ".repeat(lead_pad), line, " ".repeat(pad));
        first = false;
    }
}

/// Greedy word wrap.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Printable width, skipping ANSI escape sequences.
fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(display_width(&format!("{UNDERLINE}Length{RESET}: 15")), 10);
        assert_eq!(display_width("plain"), 5);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five six", 9);
        assert_eq!(lines, ["one two", "three", "four five", "six"]);
        assert!(wrap("", 10).is_empty());
    }
}
