use passforge::ConfigError;
use passforge::pass::config::parse_length;

use super::{CliFlags, CommandMode};

#[derive(Debug, PartialEq)]
pub enum ParseError {
    InvalidNumber(String),
    InvalidLength(ConfigError),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::InvalidLength(e) => write!(f, "Invalid length: {}", e),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Take the value following flag `args[*i]`, advancing `i`.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: std::str::FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse().map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut command = false;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-d" | "--default" => flags.default = true,
            "-e" | "--entropy" => flags.entropy = true,
            "-p" | "--passphrase" => flags.passphrase = true,
            "-a" | "--avoid-ambiguous" => flags.avoid_ambiguous = true,
            "--capitalize" => flags.capitalize = true,
            "--include-number" => flags.include_number = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "-c" | "--command" => {
                command = true;
                if args.get(i + 1).is_some_and(|a| a == "get") {
                    i += 1;
                    flags.command = CommandMode::Get;
                }
            }
            "-l" | "--length" => {
                let v = value(args, &mut i)?;
                flags.length = Some(parse_length(v).map_err(ParseError::InvalidLength)?);
            }
            "-n" | "--number" => {
                flags.number = Some(number(value(args, &mut i)?)?);
            }
            "--min-digits" => {
                flags.min_digits = Some(number(value(args, &mut i)?)?);
            }
            "--min-special" => {
                flags.min_special = Some(number(value(args, &mut i)?)?);
            }
            "--separator" => {
                flags.separator = Some(value(args, &mut i)?.to_string());
            }
            "--wordlist" => {
                flags.wordlist = Some(value(args, &mut i)?.to_string());
            }
            "-o" | "--output" => {
                // Check if next arg exists and isn't another flag
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    // No path given, default to current dir
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    if command && flags.command != CommandMode::Get {
        flags.command = if flags.has_explicit_args() {
            CommandMode::Set
        } else {
            CommandMode::Unset
        };
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        std::iter::once("passforge")
            .chain(s.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn empty_args() {
        let flags = parse(&args("")).unwrap();
        assert!(!flags.has_explicit_args());
        assert_eq!(flags.command, CommandMode::None);
    }

    #[test]
    fn password_flags() {
        let flags = parse(&args("-l 20 -n 3 --no-special -a --min-digits 4")).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert!(flags.no_special);
        assert!(flags.avoid_ambiguous);
        assert_eq!(flags.min_digits, Some(4));
    }

    #[test]
    fn passphrase_flags() {
        let flags = parse(&args("-p -l 7 --separator _ --capitalize --include-number")).unwrap();
        assert!(flags.passphrase);
        assert_eq!(flags.length, Some(7));
        assert_eq!(flags.separator.as_deref(), Some("_"));
        assert!(flags.capitalize);
        assert!(flags.include_number);
    }

    #[test]
    fn negative_length_is_rejected() {
        assert_eq!(
            parse(&args("-l -4")).unwrap_err(),
            ParseError::InvalidLength(ConfigError::NegativeLength(-4))
        );
    }

    #[test]
    fn missing_value() {
        assert_eq!(
            parse(&args("-l")).unwrap_err(),
            ParseError::MissingValue("-l".into())
        );
    }

    #[test]
    fn unknown_arg() {
        assert_eq!(
            parse(&args("--hex")).unwrap_err(),
            ParseError::UnknownArg("--hex".into())
        );
    }

    #[test]
    fn output_without_path_defaults_to_current_dir() {
        let flags = parse(&args("-o -n 2")).unwrap();
        assert_eq!(flags.output.as_deref(), Some("."));
        assert_eq!(flags.number, Some(2));
    }

    #[test]
    fn command_modes() {
        assert_eq!(parse(&args("-c")).unwrap().command, CommandMode::Unset);
        assert_eq!(parse(&args("-c get")).unwrap().command, CommandMode::Get);
        assert_eq!(parse(&args("-c -l 22")).unwrap().command, CommandMode::Set);
    }
}
