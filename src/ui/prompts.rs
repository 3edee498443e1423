//! ui::prompts
//!
//! Interactive confirmations.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations requiring user input must either have defaults or fail
//! with a clear error message.

use std::io::{BufRead, Write};
use std::path::Path;
use thiserror::Error;

use super::output::{Palette, Role};

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

/// Prompt for confirmation (yes/no) on stdin.
///
/// Returns `Err(PromptError::NotInteractive)` if not in interactive mode.
pub fn confirm(
    palette: &dyn Palette,
    message: &str,
    prompt: &str,
    default: bool,
    interactive: bool,
) -> Result<bool, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    confirm_with(&mut input, &mut output, palette, message, prompt, default)
}

/// Confirmation against arbitrary input and output streams.
///
/// An empty answer (or end of input) takes `default`; `y`/`yes` in any
/// case confirms; anything else declines.
pub fn confirm_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    palette: &dyn Palette,
    message: &str,
    prompt: &str,
    default: bool,
) -> Result<bool, PromptError> {
    let choices = if default { "[Y/n]" } else { "[y/N]" };
    write!(
        output,
        "{} {} ",
        palette.paint(Role::Warning, message),
        palette.paint(Role::Warning, &format!("{prompt} {choices}"))
    )
    .and_then(|_| output.flush())
    .map_err(|e| PromptError::IoError(e.to_string()))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| PromptError::IoError(e.to_string()))?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Ask before overwriting `path`.
///
/// Returns `Ok(true)` straight away if nothing exists at `path`.
pub fn confirm_overwrite(
    palette: &dyn Palette,
    path: &Path,
    interactive: bool,
) -> Result<bool, PromptError> {
    if !path.exists() {
        return Ok(true);
    }
    confirm(
        palette,
        &format!("The file {} already exists.", path.display()),
        "Overwrite?",
        false,
        interactive,
    )
}
