//! Presentation of token lists.
//!
//! Renders the tokens produced by the lexer as a plain list, an aligned
//! table or JSON, followed by a short statistics block. The trailing `EOF`
//! token is never shown.

pub mod output;
