//! Interactive prompts.
//!
//! All prompts write to stderr and read one line from stdin. End of input
//! is reported as `None` so callers can wind down instead of spinning on a
//! closed stream.

use std::io::{self, BufRead, Write};

/// Print a prompt and read one line of input.
///
/// Returns `Ok(None)` on end of input. The returned line is trimmed.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    eprint!("{}", prompt);
    io::stderr().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().lock().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Ask a yes/no question, defaulting to no.
///
/// Only an explicit `y`/`yes` (any case) affirms; anything else, including
/// end of input, declines.
pub fn confirm(question: &str) -> io::Result<bool> {
    match read_line(&format!("{} [y/N] ", question))? {
        Some(answer) => Ok(parse_confirm(&answer)),
        None => Ok(false),
    }
}

/// Wait for the user to acknowledge before returning to the menu.
///
/// Returns `Ok(None)` on end of input.
pub fn pause() -> io::Result<Option<()>> {
    Ok(read_line("\nPress Enter to return to the menu... ")?.map(|_| ()))
}

fn parse_confirm(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
