//! Interactive generator screen.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use passforge::pass::config::{MINIMUM_RANGE, validate_separator};
use passforge::pass::{GeneratedValue, GenerationConfig, Mode, WordList, generate_with, strength};
use passforge::rand::OsEntropy;
use passforge::settings::{PreferenceStore, Settings};

use super::{Message, enter_prompt, get_editable_input, get_numeric_input, print_help, print_screen};
use crate::terminal::{clear, reset_terminal};

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

struct Screen<'a> {
    store: &'a dyn PreferenceStore,
    settings: Settings,
    value: Option<GeneratedValue>,
    visible: bool,
    message: Option<Message>,
    clipboard: Option<ClipboardContext>,
}

pub fn generator_screen(store: &dyn PreferenceStore) {
    reset_terminal();

    let mut screen = Screen {
        store,
        settings: store.load_or_default(),
        value: None,
        visible: true,
        message: None,
        clipboard: None,
    };
    screen.regenerate();

    loop {
        screen.draw();

        let Some(input) = get_editable_input(enter_prompt(), "") else {
            continue;
        };

        let choice = input.trim();
        let action = match choice.parse::<u32>() {
            Ok(num) => screen.option(num),
            Err(_) => screen.command(choice),
        };
        if let Break = action {
            break;
        }
    }

    clear();
}

impl Screen<'_> {
    fn config(&self) -> GenerationConfig {
        self.settings.generation_config()
    }

    fn draw(&self) {
        let config = self.config();
        let bits = strength::estimate(&config, WordList::builtin());
        print_screen(
            &self.settings,
            self.value.as_ref().map(GeneratedValue::as_str),
            self.visible,
            (bits, strength::label(bits)),
            self.message.as_ref(),
        );
    }

    fn regenerate(&mut self) {
        let config = self.config();
        match generate_with(&config, &mut OsEntropy, WordList::builtin()) {
            Ok(value) => self.value = Some(value),
            Err(e) => {
                self.value = None;
                self.message = Some(Message::Error(e.to_string()));
            }
        }
    }

    /// Save, then regenerate with the new settings.
    fn commit(&mut self) {
        if let Err(e) = self.store.save(&self.settings) {
            log::warn!("saving settings failed: {e}");
            self.message = Some(Message::Error(format!("Error saving settings: {e}")));
        }
        self.regenerate();
    }

    fn option(&mut self, num: u32) -> LoopAction {
        self.message = None;
        let s = &mut self.settings;
        let password = s.mode == Mode::Password;

        match num {
            1 => {
                s.mode = match s.mode {
                    Mode::Password => Mode::Passphrase,
                    Mode::Passphrase => Mode::Password,
                }
            }
            2 => {
                let prompt = match s.mode {
                    Mode::Password => "Enter password length",
                    Mode::Passphrase => "Enter number of words",
                };
                let Some(len) = get_numeric_input(prompt, s.length()) else {
                    return Continue;
                };
                s.set_length(len);
                self.message = self.length_message();
            }
            3 if password => s.include_lower = !s.include_lower,
            4 if password => s.include_numbers = !s.include_numbers,
            5 if password => s.include_special = !s.include_special,
            6 if password => s.avoid_ambiguous = !s.avoid_ambiguous,
            7 if password && s.include_numbers => {
                let Some(n) = minimum_input("Minimum numbers", s.minimum_numbers) else {
                    return Continue;
                };
                s.minimum_numbers = n;
                self.message = self.floor_message();
            }
            8 if password && s.include_special => {
                let Some(n) = minimum_input("Minimum special characters", s.minimum_specials)
                else {
                    return Continue;
                };
                s.minimum_specials = n;
                self.message = self.floor_message();
            }
            9 if !password => {
                let Some(sep) = get_editable_input("Enter word separator", &s.word_separator)
                else {
                    return Continue;
                };
                if let Err(e) = validate_separator(&sep) {
                    self.message = Some(Message::Error(e.to_string()));
                    return Continue;
                }
                s.word_separator = sep;
            }
            10 if !password => s.capitalize = !s.capitalize,
            11 if !password => s.include_number = !s.include_number,
            _ => {
                self.message = Some(Message::Error(String::from(
                    "Invalid input, please enter a valid menu option...",
                )));
                return Continue;
            }
        }

        self.commit();
        Continue
    }

    /// Clamp a freshly entered length and report what happened.
    fn length_message(&mut self) -> Option<Message> {
        let mut config = self.config();
        if let Some(requested) = config.clamp_to_bounds() {
            self.settings.apply(&config);
            return Some(Message::Warning(format!(
                "{requested} is out of range, using {}. {}",
                config.length,
                config.length_clarification()
            )));
        }
        if config.is_below_recommended() {
            return Some(Message::Warning(String::from(config.length_clarification())));
        }
        self.floor_message()
    }

    /// Password length is raised when the minimums need more room.
    fn floor_message(&mut self) -> Option<Message> {
        let mut config = self.config();
        let Ok(effective) = config.effective_length() else {
            return None;
        };
        if config.mode == Mode::Password && effective as i64 > config.length {
            config.length = effective as i64;
            self.settings.apply(&config);
            return Some(Message::Info(format!(
                "Length raised to {effective} to fit the required characters."
            )));
        }
        None
    }

    fn command(&mut self, choice: &str) -> LoopAction {
        self.message = None;
        match choice {
            "" => self.regenerate(),
            "c" => self.copy(),
            "h" => self.visible = !self.visible,
            "r" => {
                self.settings = Settings {
                    cli_command: std::mem::take(&mut self.settings.cli_command),
                    ..Default::default()
                };
                self.commit();
            }
            "?" | "help" => {
                clear();
                print_help();
                let _ = get_editable_input("Press Enter to return", "");
            }
            "e" | "q" => return Break,
            _ => {
                self.message = Some(Message::Error(String::from("Invalid selection")));
            }
        }
        Continue
    }

    fn copy(&mut self) {
        let Some(value) = self.value.as_ref() else {
            self.message = Some(Message::Error(String::from("Nothing to copy")));
            return;
        };

        if self.clipboard.is_none() {
            match ClipboardContext::new() {
                Ok(ctx) => self.clipboard = Some(ctx),
                Err(e) => {
                    self.message = Some(Message::Error(format!("Clipboard unavailable: {e}")));
                    return;
                }
            }
        }
        let Some(ctx) = self.clipboard.as_mut() else {
            return;
        };

        match ctx.set_contents(value.as_str().to_string()) {
            Ok(()) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                self.message = Some(Message::Info(String::from("*** -COPIED TO CLIPBOARD- ***")));
            }
            Err(e) => self.message = Some(Message::Error(format!("Clipboard error: {e}"))),
        }
    }
}

/// Read a class minimum, clamped into range.
fn minimum_input(prompt: &str, current: u32) -> Option<u32> {
    let n = get_numeric_input(prompt, i64::from(current))?;
    let (lo, hi) = (*MINIMUM_RANGE.start(), *MINIMUM_RANGE.end());
    Some(n.clamp(i64::from(lo), i64::from(hi)) as u32)
}
