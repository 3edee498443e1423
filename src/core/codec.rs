//! core::codec
//!
//! Parsing and serialization of `.env` files.
//!
//! # Format
//!
//! One `KEY=VALUE` pair per line, `\n` line endings, UTF-8:
//! - Blank lines are skipped
//! - Lines whose first non-space character is `#` are comments
//! - The key is everything before the first `=`, trimmed
//! - The value is everything after the first `=`, verbatim
//!
//! Serialization emits pairs in key order with no comments, so the output
//! for a given [`Config`] is byte-for-byte stable. Not every [`Config`] has
//! a file form: [`check`] rejects the ones that would read back differently,
//! and [`save`] refuses to write them.
//!
//! # Example
//!
//! ```
//! use herofig::core::codec::{parse, serialize};
//!
//! let cfg = parse("# app\nTOKEN=abc==\n\nPORT=80\n").unwrap();
//! assert_eq!(cfg.get("TOKEN"), Some("abc=="));
//! assert_eq!(serialize(&cfg), "PORT=80\nTOKEN=abc==\n");
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::model::Config;

/// Errors from parsing env text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A pair with no `=` or with an empty key.
    #[error("invalid env variable format {0:?}")]
    InvalidVar(String),

    /// A malformed line inside a multi-line document.
    #[error("line {line}: invalid env variable format {content:?}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The raw line.
        content: String,
    },

    /// A pair that cannot be written as a single env line.
    #[error("{key:?} cannot be written to an env file: {reason}")]
    Unrepresentable { key: String, reason: &'static str },
}

/// Errors from reading or writing env files.
#[derive(Debug, Error)]
pub enum EnvFileError {
    #[error("failed to read env file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse env file '{path}': {source}")]
    Parse { path: PathBuf, source: ParseError },

    #[error("failed to write env file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("refusing to write env file '{path}': {source}")]
    Unrepresentable { path: PathBuf, source: ParseError },

    #[error("failed to search for env files under '{path}': {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// Format a pair as `KEY=VALUE`.
pub fn key_value(key: &str, value: &str) -> String {
    format!("{key}={value}")
}

/// Format a pair as `KEY=VALUE\n`.
pub fn line(key: &str, value: &str) -> String {
    format!("{key}={value}\n")
}

/// Split a single `KEY=VALUE` pair.
///
/// The key is trimmed; the value is kept as-is and may itself contain `=`.
///
/// ```
/// use herofig::core::codec::parse_var;
///
/// assert_eq!(
///     parse_var("SECRET=base64:QmVvbm9kZQ==").unwrap(),
///     ("SECRET".to_string(), "base64:QmVvbm9kZQ==".to_string())
/// );
/// assert!(parse_var("=value").is_err());
/// assert!(parse_var("NO_DELIMITER").is_err());
/// ```
pub fn parse_var(pair: &str) -> Result<(String, String), ParseError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidVar(pair.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::InvalidVar(pair.to_string()));
    }

    Ok((key.to_string(), value.to_string()))
}

/// Parse env text into a [`Config`].
///
/// Later occurrences of a key overwrite earlier ones. Any malformed line
/// fails the whole parse.
pub fn parse(text: &str) -> Result<Config, ParseError> {
    let mut config = Config::new();

    for (index, raw) in text.lines().enumerate() {
        let trimmed = raw.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (key, value) = parse_var(raw).map_err(|_| ParseError::MalformedLine {
            line: index + 1,
            content: raw.to_string(),
        })?;
        config.insert(key, value);
    }

    Ok(config)
}

/// Serialize a [`Config`] as env text in canonical key order.
pub fn serialize(config: &Config) -> String {
    config.iter().map(|var| line(var.key, var.value)).collect()
}

/// Verify that `parse(serialize(config))` gives back `config`.
///
/// Keys must be non-empty with no surrounding whitespace, must not start with `#`, and must not
/// contain `=` or line breaks. Values must not contain `\n` or end in `\r`.
///
/// ```
/// use herofig::core::codec::check;
/// use herofig::core::model::Config;
///
/// let pem: Config = [("CERT", "-----BEGIN-----\nabc")].into_iter().collect();
/// assert!(check(&pem).is_err());
/// ```
pub fn check(config: &Config) -> Result<(), ParseError> {
    for var in config.iter() {
        let reason = if var.key.is_empty() {
            Some("empty key")
        } else if var.key.trim() != var.key {
            Some("key has surrounding whitespace")
        } else if var.key.starts_with('#') {
            Some("key starts with '#'")
        } else if var.key.contains(&['=', '\n', '\r'][..]) {
            Some("key contains '=' or a line break")
        } else if var.value.contains('\n') {
            Some("value contains a newline")
        } else if var.value.ends_with('\r') {
            Some("value ends with a carriage return")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(ParseError::Unrepresentable {
                key: var.key.to_string(),
                reason,
            });
        }
    }
    Ok(())
}

/// Read and parse an env file.
pub fn open(path: &Path) -> Result<Config, EnvFileError> {
    let contents = fs::read_to_string(path).map_err(|e| EnvFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&contents).map_err(|e| EnvFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write a config to an env file atomically.
///
/// The contents go to a sibling temp file first, then replace `path` by
/// rename. Configs rejected by [`check`] are refused before anything is
/// written.
pub fn save(path: &Path, config: &Config) -> Result<(), EnvFileError> {
    check(config).map_err(|source| EnvFileError::Unrepresentable {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error(path))?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let written = write_temp(&temp_path, &serialize(config))
        .and_then(|()| fs::rename(&temp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(path)(e));
    }

    Ok(())
}

fn write_temp(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> EnvFileError {
    let path = path.to_path_buf();
    move |source| EnvFileError::Write { path, source }
}

/// Find env files below `root`.
///
/// Matches any file whose name ends in `.env`, including a bare `.env`.
/// Results are sorted.
pub fn find_env_files(root: &Path) -> Result<Vec<PathBuf>, EnvFileError> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| EnvFileError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(".env") {
            found.push(entry.into_path());
        }
    }

    Ok(found)
}
