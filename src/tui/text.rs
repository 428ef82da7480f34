use passforge::pass::Mode;
use passforge::settings::Settings;

use crate::terminal::{
    DIM, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, clear, flush,
    print_error, print_rule, print_warning,
};

pub const HIDDEN_VALUE: &str = "**********";

/// Status line under the screen box.
pub enum Message {
    Info(String),
    Warning(String),
    Error(String),
}

pub fn enter_prompt() -> &'static str {
    "Enter option (or press Enter to regenerate)"
}

pub fn print_help() {
    box_top("passforge");
    box_line_center("Password and passphrase generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments to open the generator");
    box_line("     screen. Every change is saved and regenerates the value.");
    box_line("  2) Client: pass flags (e.g. -l 20 -n 5) to print values");
    box_line("     without the screen.");
    box_line("  3) Command: -c saves flags as the default for future runs.");
    box_line("     Clear with `passforge -c`, show with `passforge -c get`.");
    box_line("");
    box_line("USAGE:");
    box_line("  passforge [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters (10-128, default 15) or words with -p (3-20, default 6)");
    box_opt("  -n, --number <N>", "How many values to generate");
    box_opt("      --no-lower", "No lowercase letters");
    box_opt("      --no-digits", "No digits");
    box_opt("      --no-special", "No special characters");
    box_opt("  -a, --avoid-ambiguous", "Leave out I O 0 1 i o");
    box_opt("      --min-digits <N>", "Minimum digits (1-9, default 1)");
    box_opt("      --min-special <N>", "Minimum special characters (1-9, default 1)");
    box_line("");
    box_line(" Passphrase:");
    box_opt("  -p, --passphrase", "Generate words instead of characters");
    box_opt("      --separator <S>", "Between words (default -)");
    box_opt("      --capitalize", "Capitalize each word");
    box_opt("      --include-number", "Append a digit to one word");
    box_opt("      --wordlist <FILE>", "Draw words from FILE instead of the built-in list");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Append to file (default: passforge.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -e, --entropy", "Show estimated entropy and the random source");
    box_opt("  -q, --quiet", "Only print generated values");
    box_line("");
    box_line(" Settings:");
    box_opt("  -c, --command [FLAGS]", "Save flags as defaults. Run alone to clear.");
    box_opt("  -d, --default", "Use default settings");
    box_opt("  -s, --saved", "Use settings saved by the interactive screen");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passforge -l 20 -n 3          Three 20 character passwords");
    box_line("  passforge -p -l 7 --capitalize");
    box_line("  passforge -l 16 --no-special -a");
    box_line("  passforge -c -p -l 8          Make an 8 word passphrase the default");
    box_line("");
    box_bottom();
    println!();
}

fn on_off(b: bool) -> &'static str {
    if b { "on" } else { "off" }
}

pub fn print_screen(
    settings: &Settings,
    value: Option<&str>,
    visible: bool,
    strength: (f64, &str),
    message: Option<&Message>,
) {
    clear();
    box_top("passforge");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    let shown = match value {
        Some(_) if !visible => HIDDEN_VALUE,
        Some(v) => v,
        None => "",
    };
    box_line(&format!("{UNDERLINE}Generated {}{RESET}:", settings.mode.label()));
    box_line(&format!("  {shown}"));
    box_line(&format!(
        "  {DIM}{:.1} bits ({}){RESET}",
        strength.0, strength.1
    ));

    box_line("");
    box_line(&format!("{UNDERLINE}Options{RESET}:"));
    box_line(&format!("  1) Type: {}", settings.mode.label()));
    match settings.mode {
        Mode::Password => {
            box_line(&format!("  2) Length: {}", settings.password_length));
            box_line("     Uppercase (A-Z): always");
            box_line(&format!("  3) Lowercase (a-z): {}", on_off(settings.include_lower)));
            box_line(&format!("  4) Numbers (0-9): {}", on_off(settings.include_numbers)));
            box_line(&format!("  5) Special (!@#$%^&*): {}", on_off(settings.include_special)));
            box_line(&format!("  6) Avoid ambiguous: {}", on_off(settings.avoid_ambiguous)));
            if settings.include_numbers {
                box_line(&format!("  7) Minimum numbers: {}", settings.minimum_numbers));
            }
            if settings.include_special {
                box_line(&format!("  8) Minimum special: {}", settings.minimum_specials));
            }
        }
        Mode::Passphrase => {
            box_line(&format!("  2) Number of words: {}", settings.number_of_words));
            box_line(&format!("  9) Word separator: {}", settings.word_separator));
            box_line(&format!("  10) Capitalize: {}", on_off(settings.capitalize)));
            box_line(&format!("  11) Include number: {}", on_off(settings.include_number)));
        }
    }

    box_line("");
    print_rule();
    box_line("   c) copy  |  h) hide/show  |  r) defaults  |  ?) help  |  e) exit");
    box_bottom();

    match message {
        Some(Message::Info(m)) => println!("{DIM}{m}{RESET}"),
        Some(Message::Warning(m)) => print_warning(m),
        Some(Message::Error(m)) => print_error(m),
        None => println!(),
    }
    flush();
}
