//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates an anchored rule for the lexer's rule table
//!
//! These macros keep the rule table readable.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's matched text
/// * `$position` - Line and column of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Position::new(1, 1));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a rule matching `$pattern` at the start of the remaining input.
///
/// # Arguments
///
/// * `$pattern` - Regex source, anchored when compiled
/// * `$kind` - The TokenKind emitted on a match
///
/// # Example
///
/// ```ignore
/// MK_RULE!(r"\+", TokenKind::Plus)
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:literal, $kind:expr) => {
        $crate::lexer::lexer::Rule::new($pattern, $kind)
    };
}
