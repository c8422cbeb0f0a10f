use std::io;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::Values;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing, unreadable, or not valid UTF-8.
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line is not a floating-point literal. `line` is 1-based.
    #[error("line {line}: '{text}' is not a number")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the values from a text file holding one number per line.
///
/// The whole file is read (and the handle closed) before any line is parsed,
/// so a parse failure never leaves the file open.
pub fn load_file(path: &Path) -> Result<Values, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_values(&text)
}

/// Parse one floating-point value per line, keeping line order.
///
/// See `split_lines` for what ends a line. Every line, including a blank
/// one, must parse as `f64` once surrounding whitespace is ignored. The first
/// bad line aborts parsing.
pub fn parse_values(text: &str) -> Result<Values, LoadError> {
    split_lines(text)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            line.trim().parse::<f64>().map_err(|source| LoadError::Parse {
                line: i + 1,
                text: line.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<f64>, _>>()
        .map(Values::new)
}

// ---------------------------------------------------------------------------
// Line splitting
// ---------------------------------------------------------------------------

/// Characters that end a line on their own.
fn is_line_end(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `text` into lines without their terminators.
///
/// `\r\n` counts as one line end. A terminator at the very end of the text
/// does not start another (empty) line, but two in a row do.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_end(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
