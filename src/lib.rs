#![allow(clippy::module_inception)]

use std::fmt::{Display, Write};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod output;

extern crate regex;

pub use lexer::lexer::{analyze, tokenize, Lexer};
pub use lexer::tokens::{tokens_as_strings, Token, TokenKind};

/// 1-based line and column; columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Resolves a byte `offset` to its physical line: the 1-based line number,
/// the line text without its newline, and the 0-based character index of
/// `offset` within that line. Only `\n` ends a line.
pub fn get_line_at_position(source: &str, offset: usize) -> Option<(usize, &str, usize)> {
    if offset > source.len() || !source.is_char_boundary(offset) {
        return None;
    }

    let start = source[..offset].rfind('\n').map_or(0, |newline| newline + 1);
    let end = source[offset..]
        .find('\n')
        .map_or(source.len(), |newline| offset + newline);

    let line_number = source[..start].matches('\n').count() + 1;
    let line_pos = source[start..offset].chars().count();

    Some((line_number, &source[start..end], line_pos))
}


/// Renders `error` against the source it came from, pointing at the offending
/// character:
///
/// ```text
/// Error: UnrecognisedToken
/// -> main.lang
///   |
/// 1 | int x = @;
///   | --------^
/// ```
pub fn display_error(error: &Error, source: &str, origin: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, error.get_offset())
        .unwrap_or((position.line, "", position.column.saturating_sub(1)));

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", origin);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (line_pos + 1).saturating_sub(removed_whitespace).max(1);

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| matches!(c, ' ' | '\t')).count();

    (&string[start..], start)
}
