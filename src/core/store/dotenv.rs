//! Dotenv-backed local vault.
//!
//! Stores plaintext secrets as `NAME=value` lines, the way a framework reads
//! `.env.local` overrides. Comments and unrelated lines survive rewrites.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{validate_name, Listing, SecretStore};
use crate::core::domain::SecretValue;
use crate::error::{Result, StoreError};

/// Local vault backed by a dotenv file.
#[derive(Debug, Clone)]
pub struct Dotenv {
    path: PathBuf,
}

impl Dotenv {
    /// Local vault at `path`. The file is created on first seal.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&self.path).map_err(|source| {
            StoreError::Unavailable {
                path: self.describe(),
                source,
            }
            .into()
        })
    }
}

impl SecretStore for Dotenv {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn list(&self, _include_unreadable: bool) -> Result<Listing> {
        let contents = self.read()?;
        let mut secrets = std::collections::BTreeMap::new();

        for (i, line) in contents.lines().enumerate() {
            match parse_line(line) {
                Line::Blank => {}
                Line::Entry(name, value) => {
                    // Later assignments win, matching how dotenv files are loaded.
                    secrets.insert(name.to_string(), SecretValue::readable(value));
                }
                Line::Malformed => {
                    return Err(StoreError::Malformed {
                        path: self.describe(),
                        line: i + 1,
                    }
                    .into());
                }
            }
        }

        debug!(path = %self.path.display(), secrets = secrets.len(), "local vault listed");
        Ok(Listing::new(secrets))
    }

    fn seal(&mut self, name: &str, value: &[u8]) -> Result<Option<String>> {
        validate_name(name)?;
        let value =
            std::str::from_utf8(value).map_err(|_| StoreError::InvalidValue(name.to_string()))?;

        let contents = self.read()?;
        let assignment = format!("{}={}", name, encode_value(value));

        let mut updated = false;
        let mut lines: Vec<String> = Vec::new();
        for line in contents.lines() {
            match parse_line(line) {
                Line::Entry(key, _) if key == name => {
                    if !updated {
                        lines.push(assignment.clone());
                        updated = true;
                    }
                }
                _ => lines.push(line.to_string()),
            }
        }
        if !updated {
            lines.push(assignment);
        }

        let mut output = lines.join("\n");
        output.push('\n');

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| StoreError::WriteFailed {
                path: self.describe(),
                source,
            })?;
        }
        fs::write(&self.path, output).map_err(|source| StoreError::WriteFailed {
            path: self.describe(),
            source,
        })?;

        debug!(name = %name, updated, "secret written to local vault");

        Ok(Some(format!(
            "Secret \"{}\" {} in \"{}\".",
            name,
            if updated { "updated" } else { "added" },
            self.describe()
        )))
    }
}

enum Line<'a> {
    Blank,
    Entry(&'a str, String),
    Malformed,
}

fn parse_line(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Line::Blank;
    }

    let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
    let Some((key, raw)) = trimmed.split_once('=') else {
        return Line::Malformed;
    };

    let key = key.trim();
    if key.is_empty() {
        return Line::Malformed;
    }

    Line::Entry(key, decode_value(raw.trim()))
}

fn decode_value(raw: &str) -> String {
    if let Some(value) = decode_quoted(raw) {
        return value;
    }

    // Unquoted: strip a trailing inline comment.
    match raw.find(" #") {
        Some(idx) => raw[..idx].trim_end().to_string(),
        None => raw.to_string(),
    }
}

/// Decode a quoted value, allowing an inline comment after the closing quote.
fn decode_quoted(raw: &str) -> Option<String> {
    let quote = raw.chars().next().filter(|c| matches!(c, '"' | '\''))?;
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw[1..].char_indices();

    let rest = loop {
        let (idx, ch) = chars.next()?;
        if ch == quote {
            break &raw[idx + 2..];
        }
        if ch != '\\' || quote == '\'' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some((_, 'n')) => out.push('\n'),
            Some((_, 'r')) => out.push('\r'),
            Some((_, 't')) => out.push('\t'),
            Some((_, other)) => out.push(other),
            None => out.push('\\'),
        }
    };

    let rest = rest.trim_start();
    (rest.is_empty() || rest.starts_with('#')).then_some(out)
}

fn encode_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '#' | '"' | '\'' | '\\' | '=' | '$' | '`'));
    if !needs_quotes {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
