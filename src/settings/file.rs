//! Settings file persistence.
//!
//! One line of comma-separated fields. `|` escapes a literal `,` or `|`
//! inside a field.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use super::{PreferenceStore, Settings};
use crate::Result;
use crate::pass::Mode;
use crate::pass::config::{PASSPHRASE_WORDS_RANGE, PASSWORD_LENGTH_RANGE, parse_length};

const FIELD_COUNT: usize = 14;

/// Settings kept in a single-line text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`super::default_path`].
    pub fn at_default_path() -> Self {
        Self::new(super::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Result<Settings> {
        let mut settings = Settings::default();
        load(&self.path, &mut settings)?;
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        save(&self.path, settings)
    }
}

fn save(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
        settings.mode.label(),
        settings.password_length,
        settings.number_of_words,
        settings.include_lower,
        settings.include_numbers,
        settings.include_special,
        settings.avoid_ambiguous,
        settings.minimum_numbers,
        settings.minimum_specials,
        escape(&settings.word_separator),
        settings.capitalize,
        settings.include_number,
        settings.number_of_values,
        escape(&settings.cli_command),
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

fn load(path: &Path, settings: &mut Settings) -> Result<()> {
    if !path.exists() {
        log::debug!("no settings at {}, writing defaults", path.display());
        return save(path, settings);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let line = line.trim_end_matches(['\r', '\n']);

    if line.is_empty() {
        return save(path, settings);
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELD_COUNT {
        log::warn!(
            "settings file {} has {} fields, expected {FIELD_COUNT}; resetting",
            path.display(),
            parts.len()
        );
        return save(path, settings);
    }

    settings.mode = match parts[0].as_str() {
        "passphrase" => Mode::Passphrase,
        _ => Mode::Password,
    };
    settings.password_length = length_or(
        &parts[1],
        settings.password_length,
        &PASSWORD_LENGTH_RANGE,
    );
    settings.number_of_words = length_or(
        &parts[2],
        settings.number_of_words,
        &PASSPHRASE_WORDS_RANGE,
    );
    settings.include_lower = parts[3].parse().unwrap_or(settings.include_lower);
    settings.include_numbers = parts[4].parse().unwrap_or(settings.include_numbers);
    settings.include_special = parts[5].parse().unwrap_or(settings.include_special);
    settings.avoid_ambiguous = parts[6].parse().unwrap_or(settings.avoid_ambiguous);
    settings.minimum_numbers = parts[7].parse().unwrap_or(settings.minimum_numbers);
    settings.minimum_specials = parts[8].parse().unwrap_or(settings.minimum_specials);
    if !parts[9].is_empty() {
        settings.word_separator = parts[9].clone();
    }
    settings.capitalize = parts[10].parse().unwrap_or(settings.capitalize);
    settings.include_number = parts[11].parse().unwrap_or(settings.include_number);
    settings.number_of_values = parts[12].parse().unwrap_or(settings.number_of_values);
    settings.cli_command = parts[13].clone();

    Ok(())
}

/// Stored lengths are clamped into `bounds`; unparsable ones use `fallback`.
fn length_or(field: &str, fallback: i64, bounds: &RangeInclusive<i64>) -> i64 {
    match parse_length(field) {
        Ok(n) if bounds.contains(&n) => n,
        Ok(n) => {
            let clamped = n.clamp(*bounds.start(), *bounds.end());
            log::warn!("stored length {n} is out of range, using {clamped}");
            clamped
        }
        Err(e) => {
            log::warn!("ignoring stored length: {e}");
            fallback
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
