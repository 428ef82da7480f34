//! CLI context - bundles settings, flags, and clipboard state.

use std::fs::OpenOptions;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use passforge::pass::config::MINIMUM_RANGE;
use passforge::pass::output::{batch_to_string, write_batch};
use passforge::pass::{GenerationConfig, Mode, SecureBufWriter, WordList, strength};
use passforge::rand::{OsEntropy, RandomSource};
use passforge::settings::{PreferenceStore, Settings};

use super::{CliFlags, CommandMode, prompts};
use crate::tui::print_help;

const DEFAULT_OUTPUT_FILE: &str = "passforge.txt";

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context<'a> {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
    store: &'a dyn PreferenceStore,
    words: Option<WordList>,
    args: Vec<String>,
}

impl<'a> Context<'a> {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>, store: &'a dyn PreferenceStore) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        if flags.quiet {
            prompts::set_quiet(true);
        }

        let saved_settings = store.load().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        let settings = if flags.saved {
            saved_settings.clone()
        } else {
            Settings {
                cli_command: saved_settings.cli_command.clone(),
                ..Default::default()
            }
        };

        Ok(Self {
            settings,
            saved_settings,
            clipboard: None,
            flags,
            store,
            words: None,
            args,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.handle_command_mode()?;
        self.apply_flags();
        self.load_wordlist()?;
        let config = self.checked_config()?;
        self.generate_output(&config)
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    fn handle_command_mode(&mut self) -> Result<(), Done> {
        match self.flags.command {
            CommandMode::Get => {
                if self.settings.cli_command.is_empty() {
                    println!("(no saved command)");
                } else {
                    println!("{}", self.settings.cli_command);
                }
                Err(Done)
            }
            CommandMode::Unset => {
                self.saved_settings.cli_command.clear();
                if let Err(e) = self.store.save(&self.saved_settings) {
                    prompts::warn(&format!("Failed to clear command: {}", e));
                }
                Err(Done)
            }
            CommandMode::Set | CommandMode::None => Ok(()),
        }
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if self.flags.command == CommandMode::Set {
            let command = self.args[1..]
                .iter()
                .filter(|a| *a != "-c" && *a != "--command")
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");
            self.saved_settings.cli_command = command.clone();
            if let Err(e) = self.store.save(&self.saved_settings) {
                prompts::warn(&format!("Failed to save command: {}", e));
            }
            self.settings.cli_command = command;
        }

        // Apply saved command if no explicit args given
        if !self.settings.cli_command.is_empty()
            && self.flags.command == CommandMode::None
            && !self.flags.has_explicit_args()
        {
            let mut combined_args = vec![self.args[0].clone()];
            combined_args.extend(
                self.settings
                    .cli_command
                    .split_whitespace()
                    .map(String::from),
            );
            match super::parse(&combined_args) {
                Ok(mut saved_flags) => {
                    saved_flags.quiet |= self.flags.quiet;
                    saved_flags.clipboard |= self.flags.clipboard;
                    saved_flags.entropy |= self.flags.entropy;
                    self.flags = saved_flags;
                    if self.flags.quiet {
                        prompts::set_quiet(true);
                    }
                    if self.flags.saved {
                        self.settings = self.saved_settings.clone();
                    }
                }
                Err(e) => prompts::warn(&format!("Ignoring saved command: {}", e)),
            }
        }

        let flags = &self.flags;
        let settings = &mut self.settings;

        // Mode first: the length flag means characters or words depending on it.
        if flags.passphrase {
            settings.mode = Mode::Passphrase;
        }
        if let Some(len) = flags.length {
            settings.set_length(len);
        }
        if let Some(num) = flags.number {
            settings.number_of_values = num;
        }

        if flags.no_lower {
            settings.include_lower = false;
        }
        if flags.no_digits {
            settings.include_numbers = false;
        }
        if flags.no_special {
            settings.include_special = false;
        }
        if flags.avoid_ambiguous {
            settings.avoid_ambiguous = true;
        }
        if let Some(n) = flags.min_digits {
            settings.minimum_numbers = n;
        }
        if let Some(n) = flags.min_special {
            settings.minimum_specials = n;
        }
        if let Some(ref sep) = flags.separator {
            settings.word_separator = sep.clone();
        }
        if flags.capitalize {
            settings.capitalize = true;
        }
        if flags.include_number {
            settings.include_number = true;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => self.clipboard = Some(c),
                Err(_) => {
                    if !prompts::clipboard_fallback_prompt() {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    fn load_wordlist(&mut self) -> Result<(), Done> {
        let Some(ref path) = self.flags.wordlist else {
            return Ok(());
        };
        match WordList::from_file(path) {
            Ok(list) => {
                self.words = Some(list);
                Ok(())
            }
            Err(e) => {
                prompts::error(format!("Cannot use word list {}: {}", path, e));
                std::process::exit(1);
            }
        }
    }

    /// Clamp to the user-facing bounds, warn about weak choices and reject
    /// invalid settings before anything is generated.
    fn checked_config(&self) -> Result<GenerationConfig, Done> {
        let mut config = self.settings.generation_config();

        if let Some(requested) = config.clamp_to_bounds() {
            prompts::length_clamped(requested, config.length, config.length_clarification());
        } else if config.is_below_recommended() {
            prompts::below_recommended(config.length_clarification());
        }

        if config.mode == Mode::Password {
            for (what, enabled, value) in [
                ("numbers", config.use_digits, &mut config.minimum_digits),
                ("special characters", config.use_special, &mut config.minimum_special),
            ] {
                if enabled && !MINIMUM_RANGE.contains(&*value) {
                    let used = (*value).clamp(*MINIMUM_RANGE.start(), *MINIMUM_RANGE.end());
                    prompts::minimum_clamped(what, *value, used);
                    *value = used;
                }
            }
        }

        if let Err(e) = config.effective_length() {
            prompts::error(format!("Error: {}", e));
            std::process::exit(2);
        }

        Ok(config)
    }

    fn words(&self) -> &WordList {
        self.words.as_ref().unwrap_or_else(|| WordList::builtin())
    }

    /// Generate values and handle output.
    pub fn generate_output(&mut self, config: &GenerationConfig) -> Result<(), Done> {
        let mut rng = match OsEntropy::probe() {
            Ok(rng) => rng,
            Err(e) => {
                prompts::error(format!("Error: {}", e));
                std::process::exit(1);
            }
        };

        if self.flags.entropy {
            let bits = strength::estimate(config, self.words());
            prompts::entropy(bits, strength::label(bits), rng.name());
        }

        let count = self.settings.number_of_values.max(1);
        let result = if let Some(mut ctx) = self.clipboard.take() {
            self.to_clipboard(&mut ctx, config, count, &mut rng)
        } else if let Some(path) = self.flags.output.clone() {
            self.to_file(&output_path(&path), config, count, &mut rng)
        } else {
            let stdout = std::io::stdout();
            let mut out = SecureBufWriter::new(stdout.lock());
            write_batch(config, count, &mut rng, self.words(), &mut out)
        };

        if let Err(e) = result {
            prompts::error(format!("Error: {}", e));
            std::process::exit(1);
        }
        Ok(())
    }

    fn to_clipboard(
        &self,
        ctx: &mut ClipboardContext,
        config: &GenerationConfig,
        count: usize,
        rng: &mut OsEntropy,
    ) -> passforge::Result<()> {
        let values = batch_to_string(config, count, rng, self.words())?;
        match ctx.set_contents(values.to_string()) {
            Ok(_) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                prompts::clipboard_copied();
            }
            Err(e) => prompts::clipboard_error(&e.to_string()),
        }
        Ok(())
    }

    fn to_file(
        &self,
        path: &str,
        config: &GenerationConfig,
        count: usize,
        rng: &mut OsEntropy,
    ) -> passforge::Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut out = SecureBufWriter::new(file);
        write_batch(config, count, rng, self.words(), &mut out)?;
        drop(out);

        let full_path = std::fs::canonicalize(path)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| path.to_string());
        prompts::values_written(count, &full_path);
        Ok(())
    }
}

/// Resolve `-o` arguments: directories get the default file name and bare
/// names get a `.txt` extension.
fn output_path(path: &str) -> String {
    if path == "." {
        DEFAULT_OUTPUT_FILE.to_string()
    } else if path.ends_with('/') {
        format!("{}{}", path, DEFAULT_OUTPUT_FILE)
    } else if !path.ends_with(".txt") {
        format!("{}.txt", path)
    } else {
        path.to_string()
    }
}
