/// Command input: positional arguments, stdin, and files.
use std::io::Read;

use crate::powers::PowerError;

/// Positional value that means "read stdin".
pub const STDIN_ARG: &str = "-";

/// Resolve a positional input argument.
///
/// `-` reads all of stdin with one trailing line ending removed; any other
/// value is returned as given.
///
/// # Errors
///
/// Returns `PowerError::Io` if stdin cannot be read.
pub fn read_input(arg: &str) -> Result<String, PowerError> {
    if arg != STDIN_ARG {
        return Ok(arg.to_owned());
    }
    let mut text = read_stdin()?;
    let trimmed = strip_line_ending(&text).len();
    text.truncate(trimmed);
    Ok(text)
}

/// Read a source file, or stdin for `-`, without altering its content.
///
/// # Errors
///
/// Returns `PowerError::FileNotFound` for a missing path and
/// `PowerError::Io` for any other read failure.
pub fn read_source(path: &str) -> Result<String, PowerError> {
    if path == STDIN_ARG {
        return read_stdin();
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PowerError::FileNotFound {
            path: path.to_owned(),
        },
        _ => PowerError::Io(e),
    })
}

/// Split a comma-separated list, trimming items and skipping empty ones.
#[must_use]
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn read_stdin() -> Result<String, PowerError> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
