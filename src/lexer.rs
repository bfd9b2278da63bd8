//! Lexer module for annotated source files
//!
//! This module contains the tokenization logic, including token definitions,
//! the raw logos lexer and the pragma scope tracker layered on top of it.
//!
//! Directive Scope Handling
//!
//! The raw lexer knows nothing about directives: it only classifies characters.
//! Deciding where a directive starts and ends happens in a second stage, the
//! [`PragmaScope`] adaptor. Splitting it this way keeps the token definitions a
//! vanilla logos enum and confines the line-continuation state machine to one
//! small type owned by a single scan.

pub mod lexer_impl;
pub mod pragma_scope;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use pragma_scope::PragmaScope;
pub use tokens::Token;

/// Main lexer function that returns directive-scoped tokens
pub fn lex(source: &str) -> Vec<Token> {
    PragmaScope::new(source).map(|(token, _)| token).collect()
}

/// Lexing function that preserves source spans for the parser
///
/// The synthetic close token carries the span of the newline it replaces, or an
/// empty span at the end of the source for an unterminated final directive.
pub fn lex_with_spans(source: &str) -> Vec<(Token, std::ops::Range<usize>)> {
    PragmaScope::new(source).collect()
}
