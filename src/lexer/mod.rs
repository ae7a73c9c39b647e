//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a sequence of tokens. It handles:
//!
//! - Tokenization of source code using an ordered table of regex rules
//! - Reclassification of identifiers into keywords and boolean literals
//! - Line and column tracking for every token
//! - Optional suppression of whitespace and comments

pub mod lexer;
pub mod tokens;
