use std::fmt::Display;

use clap::ValueEnum;
use serde::Serialize;

use crate::lexer::tokens::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `KIND(value)` line per token
    #[default]
    Simple,
    /// Aligned table with value, line and column
    Detailed,
    /// JSON array of `{type, value, line, column}` objects
    Json,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TokenRecord<'a> {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: &'a str,
    pub line: usize,
    pub column: usize,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        TokenRecord {
            kind: token.kind,
            value: &token.value,
            line: token.line(),
            column: token.column(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub token_count: usize,
    pub lines_processed: usize,
}

impl Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "  Total tokens: {}", self.token_count)?;
        write!(f, "  Lines processed: {}", self.lines_processed)
    }
}

/// Token count leaves out `EOF`; the line count is the highest line of any
/// token, `EOF` included.
pub fn statistics(tokens: &[Token]) -> Statistics {
    Statistics {
        token_count: visible(tokens).count(),
        lines_processed: tokens.iter().map(Token::line).max().unwrap_or(0),
    }
}

pub fn render_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, serde_json::Error> {
    let mut lines = vec![];

    match format {
        OutputFormat::Simple => {
            lines.push(String::from("Tokens:"));
            lines.extend(visible(tokens).map(|token| format!("  {}", token)));
        }
        OutputFormat::Detailed => {
            lines.push(String::from("Detailed analysis:"));
            lines.push(format!("{:<20} {:<15} {:<6} {:<6}", "Type", "Value", "Line", "Column"));
            lines.push("-".repeat(50));
            lines.extend(visible(tokens).map(|token| {
                format!(
                    "{:<20} {:<15} {:<6} {:<6}",
                    token.kind.name(),
                    quoted(&token.value),
                    token.line(),
                    token.column()
                )
            }));
        }
        OutputFormat::Json => {
            let records: Vec<TokenRecord> = visible(tokens).map(TokenRecord::from).collect();
            lines.push(serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(lines.join("\n"))
}

/// The token listing in `format` followed by its statistics.
pub fn render(tokens: &[Token], format: OutputFormat) -> Result<String, serde_json::Error> {
    let body = render_tokens(tokens, format)?;

    Ok(format!("{}\n\n{}", body, statistics(tokens)))
}

/// Single-quoted like a Python string literal, switching to double quotes
/// when the text holds a `'` and no `"`.
pub fn quoted(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);

    out
}

fn visible(tokens: &[Token]) -> impl Iterator<Item = &Token> {
    tokens.iter().filter(|token| token.kind != TokenKind::Eof)
}
