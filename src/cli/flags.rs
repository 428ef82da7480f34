/// What `-c/--command` asked for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CommandMode {
    #[default]
    None,
    /// `-c get`: print the saved command.
    Get,
    /// `-c <FLAGS>`: save the other flags as the default command.
    Set,
    /// `-c` alone: clear the saved command.
    Unset,
}

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub default: bool,
    pub entropy: bool,
    pub passphrase: bool,
    pub capitalize: bool,
    pub include_number: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_special: bool,
    pub avoid_ambiguous: bool,
    pub command: CommandMode,
    pub length: Option<i64>,
    pub number: Option<usize>,
    pub min_digits: Option<u32>,
    pub min_special: Option<u32>,
    pub separator: Option<String>,
    pub wordlist: Option<String>,
    pub output: Option<String>,
}

impl CliFlags {
    /// True when any flag changes what gets generated or where it goes.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.saved
            || self.default
            || self.passphrase
            || self.capitalize
            || self.include_number
            || self.no_lower
            || self.no_digits
            || self.no_special
            || self.avoid_ambiguous
            || self.min_digits.is_some()
            || self.min_special.is_some()
            || self.separator.is_some()
            || self.wordlist.is_some()
            || self.output.is_some()
    }
}
