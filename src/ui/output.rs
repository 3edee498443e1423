//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag. Color is
//! an injected [`Palette`]: commands ask the palette to paint text for a
//! [`Role`] and never emit escape codes themselves.

use std::fmt::Display;
use std::io::IsTerminal;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// What a piece of output represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Success,
    Warning,
    Error,
    /// Local files and paths
    Local,
    /// Remote app names and config keys
    Remote,
    /// Search matches inside a key
    Highlight,
}

/// Formatting capability for terminal output.
pub trait Palette: Send + Sync {
    /// Wrap `text` for display in the given role.
    fn paint(&self, role: Role, text: &str) -> String;
}

/// No styling at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Palette for Plain {
    fn paint(&self, _role: Role, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI SGR colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

impl Ansi {
    fn code(role: Role) -> &'static str {
        match role {
            Role::Success => "32",
            Role::Warning => "33",
            Role::Error => "31",
            Role::Local => "36",
            Role::Remote => "35",
            Role::Highlight => "35;40",
        }
    }
}

impl Palette for Ansi {
    fn paint(&self, role: Role, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        format!("\x1b[{}m{}\x1b[0m", Self::code(role), text)
    }
}

/// Decide whether stdout should be colored.
///
/// Color is off when `--no-color` is given, when `NO_COLOR` is set to a
/// non-empty value, or when stdout is not a terminal.
pub fn color_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a `KEY=VALUE` line with the key painted as remote.
pub fn format_var(palette: &dyn Palette, key: &str, value: &str) -> String {
    format!("{}={}", palette.paint(Role::Remote, key), value)
}

/// Paint `key`, highlighting `len` bytes at each offset in `matches`.
///
/// Offsets must be sorted, non-overlapping and on char boundaries, as
/// produced by [`crate::core::search::substring_search`].
pub fn format_highlighted(palette: &dyn Palette, key: &str, matches: &[usize], len: usize) -> String {
    let mut out = String::new();
    let mut pos = 0;

    for &start in matches {
        let end = (start + len).min(key.len());
        if start < pos || start >= end {
            continue;
        }
        out.push_str(&palette.paint(Role::Remote, &key[pos..start]));
        out.push_str(&palette.paint(Role::Highlight, &key[start..end]));
        pos = end;
    }
    out.push_str(&palette.paint(Role::Remote, &key[pos..]));

    out
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
