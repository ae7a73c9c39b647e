use lazy_static::lazy_static;
use log::{debug, trace, warn};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_RULE, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    /// Declared order is precedence: the first rule matching at the cursor wins,
    /// even when a later one would match more text.
    pub static ref RULES: Vec<Rule> = vec![
        MK_RULE!(r"//.*", TokenKind::Comment),
        MK_RULE!(r"/\*[\s\S]*?\*/", TokenKind::Comment),
        MK_RULE!(r#""([^"\\]|\\.)*""#, TokenKind::StringLiteral),
        MK_RULE!(r"'([^'\\]|\\.)*'", TokenKind::StringLiteral),
        MK_RULE!(r"\d+\.\d+", TokenKind::Number),
        MK_RULE!(r"\d+", TokenKind::Number),
        MK_RULE!("==", TokenKind::Equal),
        MK_RULE!("!=", TokenKind::NotEqual),
        MK_RULE!("<=", TokenKind::LessEqual),
        MK_RULE!(">=", TokenKind::GreaterEqual),
        MK_RULE!("<", TokenKind::LessThan),
        MK_RULE!(">", TokenKind::GreaterThan),
        MK_RULE!("=", TokenKind::Assign),
        MK_RULE!(r"\+", TokenKind::Plus),
        MK_RULE!("-", TokenKind::Minus),
        MK_RULE!(r"\*", TokenKind::Multiply),
        MK_RULE!("/", TokenKind::Divide),
        MK_RULE!("%", TokenKind::Modulo),
        MK_RULE!(";", TokenKind::Semicolon),
        MK_RULE!(",", TokenKind::Comma),
        MK_RULE!(r"\(", TokenKind::LeftParen),
        MK_RULE!(r"\)", TokenKind::RightParen),
        MK_RULE!(r"\{", TokenKind::LeftBrace),
        MK_RULE!(r"\}", TokenKind::RightBrace),
        MK_RULE!(r"\[", TokenKind::LeftBracket),
        MK_RULE!(r"\]", TokenKind::RightBracket),
        MK_RULE!("[a-zA-Z_][a-zA-Z0-9_]*", TokenKind::Identifier),
        MK_RULE!(r"[ \t]+", TokenKind::Whitespace),
        MK_RULE!(r"\n", TokenKind::Newline),
    ];
}

#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    kind: TokenKind,
}

impl Rule {
    /// Panics if `pattern` is not a valid regex; rules are compiled once from
    /// constant patterns.
    pub fn new(pattern: &str, kind: TokenKind) -> Rule {
        Rule {
            regex: Regex::new(&format!(r"\A(?:{})", pattern)).unwrap(),
            kind,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Text matched at the very start of `remainder`, never further in.
    pub fn match_at<'a>(&self, remainder: &'a str) -> Option<&'a str> {
        self.regex.find(remainder).map(|found| found.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.into(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans the whole source from the start.
    ///
    /// Whitespace and comment tokens are still classified and advance the
    /// cursor when skipped; they are only left out of the result. On success
    /// the result ends with a single `EOF` token. The first character no rule
    /// matches aborts the scan with [`ErrorImpl::UnrecognisedToken`].
    pub fn tokenize(
        &mut self,
        skip_whitespace: bool,
        skip_comments: bool,
    ) -> Result<Vec<Token>, Error> {
        self.reset();
        debug!(
            "tokenizing {} bytes (skip_whitespace={}, skip_comments={})",
            self.source.len(),
            skip_whitespace,
            skip_comments
        );

        let mut skipped = Vec::with_capacity(2);
        if skip_whitespace {
            skipped.push(TokenKind::Whitespace);
        }
        if skip_comments {
            skipped.push(TokenKind::Comment);
        }

        while !self.at_eof() {
            let Some((mut kind, value)) = self.next_match() else {
                let error = Error::new(
                    ErrorImpl::UnrecognisedToken { token: self.at() },
                    self.position(),
                    self.pos,
                );
                warn!("{}", error);
                self.tokens.clear();
                return Err(error);
            };

            if kind == TokenKind::Identifier {
                if let Some(reserved) = RESERVED_LOOKUP.get(value.as_str()) {
                    kind = *reserved;
                }
            }

            trace!("{} {:?} at {}", kind, value, self.position());

            let token = MK_TOKEN!(kind, value, self.position());
            self.advance(&token);

            if !token.is_one_of_many(&skipped) {
                self.push(token);
            }
        }

        let eof = MK_TOKEN!(TokenKind::Eof, String::new(), self.position());
        self.push(eof);
        debug!("produced {} tokens", self.tokens.len());

        Ok(self.tokens.clone())
    }

    /// Tokens of the last successful [`Lexer::tokenize`] call.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    fn reset(&mut self) {
        self.tokens.clear();
        self.pos = 0;
        self.line = 1;
        self.column = 1;
    }

    fn next_match(&self) -> Option<(TokenKind, String)> {
        let remainder = self.remainder();
        RULES.iter().find_map(|rule| {
            rule.match_at(remainder)
                .map(|matched| (rule.kind(), matched.to_string()))
        })
    }

    fn advance(&mut self, token: &Token) {
        self.pos += token.value.len();

        if token.kind == TokenKind::Newline {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += token.value.chars().count();
        }
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or_default()
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

pub fn tokenize(
    source: impl Into<String>,
    skip_whitespace: bool,
    skip_comments: bool,
) -> Result<Vec<Token>, Error> {
    Lexer::new(source).tokenize(skip_whitespace, skip_comments)
}

/// Verbose mode keeps whitespace and comment tokens.
pub fn analyze(code: &str, verbose: bool) -> Result<Vec<Token>, Error> {
    Lexer::new(code).tokenize(!verbose, !verbose)
}
