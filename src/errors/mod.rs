//! Error types for lexical analysis.
//!
//! Scanning has a single failure mode: a character at which no rule of the
//! table matches. The error carries that character and its line and column,
//! and can suggest a fix for the common cases.

pub mod errors;
