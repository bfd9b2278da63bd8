//! Implementation of the raw lexer
//!
//! This module provides convenience functions for tokenizing source text.
//! The actual tokenization is handled entirely by logos; these functions do not
//! track directive scope (see [`super::pragma_scope`] for that).

use crate::lexer::tokens::Token;
use logos::Logos;
use tracing::warn;

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
///
/// Characters no token class accepts are reported and skipped.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => warn!(
                offset = lexer.span().start,
                text = lexer.slice(),
                "skipping illegal character"
            ),
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize("int x;");
        assert_eq!(
            tokens,
            vec![Token::Ident, Token::Whitespace, Token::Ident, Token::Other]
        );
    }

    #[test]
    fn test_raw_stream_keeps_newlines_and_backslashes() {
        let tokens = tokenize("#pragma acc parallel \\\nloop\n");
        assert_eq!(
            tokens,
            vec![
                Token::PragmaOpen,
                Token::Whitespace,
                Token::Acc,
                Token::Whitespace,
                Token::Parallel,
                Token::Whitespace,
                Token::Backslash,
                Token::Newline,
                Token::Loop,
                Token::Newline,
            ]
        );
    }

    #[test]
    fn test_clause_tokenization() {
        let tokens = tokenize("reduction(+:sum)");
        assert_eq!(
            tokens,
            vec![
                Token::Reduction,
                Token::OpenParen,
                Token::Plus,
                Token::Colon,
                Token::Ident,
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_with_spans() {
        let tokens = tokenize_with_spans("copy(a)");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0], (Token::Copy, 0..4));
        assert_eq!(tokens[1], (Token::OpenParen, 4..5));
        assert_eq!(tokens[2], (Token::Ident, 5..6));
        assert_eq!(tokens[3], (Token::CloseParen, 6..7));
    }

    #[test]
    fn test_spans_cover_every_character() {
        let source = "  a[i] = b * 2; // ünïcode\n\tx++;\n";
        let tokens = tokenize_with_spans(source);
        let rebuilt: String = tokens.iter().map(|(_, span)| &source[span.clone()]).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }
}
