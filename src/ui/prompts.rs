//! Yes/no prompts.
//!
//! Answers are free-form text normalised case-insensitively: `yes`, `ye`, `y`
//! and an empty line mean yes; `no` and `n` mean no. Anything else re-prompts.

use std::io::{BufRead, Write};

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{BootstrapError, Result};

/// Shown before each answer is read.
pub const PROMPT_MARKER: &str = "->";

/// Shown after an answer that is neither yes nor no.
pub const RETRY_MESSAGE: &str = "Please respond with 'yes' or 'no'";

/// Interpret one answer. `None` means the answer was not understood.
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" | "y" | "ye" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask on a line-oriented reader until a valid answer arrives.
///
/// Reads exactly one line per attempt. End of input counts as "no".
pub fn read_yes_no<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<bool> {
    loop {
        write!(writer, "{} ", PROMPT_MARKER)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            return Ok(false);
        }

        match parse_answer(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(writer, "{}", RETRY_MESSAGE)?,
        }
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask on an interactive terminal, re-prompting on invalid input.
pub fn prompt_yes_no(term: &Term) -> Result<bool> {
    let answer: String = Input::with_theme(&prompt_theme())
        .with_prompt(PROMPT_MARKER)
        .allow_empty(true)
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            parse_answer(input).map(|_| ()).ok_or(RETRY_MESSAGE)
        })
        .interact_text_on(term)
        .map_err(|e| BootstrapError::Io(e.into()))?;

    Ok(parse_answer(&answer).unwrap_or(false))
}
